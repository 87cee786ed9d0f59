// Copyright 2025 The dcSCTP Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::math::round_up_to_4;
use crate::packet::ContractViolation;

/// An ordered, append-only sequence. Items are only ever added at the end and are visited in the
/// order they were appended. Appending moves the item into the list, so an item can't be a
/// member of two lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct List<T> {
    items: Vec<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Something that has been serialized into a TLV.
pub trait Encoded {
    /// The length of the TLV without trailing padding.
    fn natural_length(&self) -> usize;

    /// The number of bytes the TLV occupies, padding included. Always a multiple of four.
    fn encoded_length(&self) -> usize {
        round_up_to_4!(self.natural_length())
    }
}

/// A [`List`] of encoded TLVs that keeps a running total of their encoded length.
#[derive(Debug)]
pub struct EncodedList<T: Encoded> {
    list: List<T>,
    encoded_length: usize,
}

impl<T: Encoded> Default for EncodedList<T> {
    fn default() -> Self {
        Self { list: List::new(), encoded_length: 0 }
    }
}

impl<T: Encoded> EncodedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, item: T) {
        self.encoded_length += item.encoded_length();
        self.list.append(item);
    }

    pub fn first(&self) -> Option<&T> {
        self.list.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.list.last()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.list.iter()
    }

    /// The sum of the padded lengths of all members.
    pub fn encoded_length(&self) -> usize {
        self.encoded_length
    }

    /// The length that a TLV containing the members declares in its length field. The padding
    /// of the last member is not counted, see
    /// <https://datatracker.ietf.org/doc/html/rfc9260#section-3.2>.
    pub fn declared_length(&self) -> usize {
        match self.list.last() {
            Some(last) => self.encoded_length - (last.encoded_length() - last.natural_length()),
            None => 0,
        }
    }

    /// Recounts the encoded length by visiting every member.
    pub fn verify(&self) -> Result<(), ContractViolation> {
        let counted: usize = self.list.iter().map(Encoded::encoded_length).sum();
        if counted != self.encoded_length {
            return Err(ContractViolation::LengthAccounting {
                tracked: self.encoded_length,
                counted,
            });
        }
        Ok(())
    }
}

impl<T: Encoded> FromIterator<T> for EncodedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.append(item);
        }
        list
    }
}

impl<T: Encoded> IntoIterator for EncodedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T: Encoded> IntoIterator for &'a EncodedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}
