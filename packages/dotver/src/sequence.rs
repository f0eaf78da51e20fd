use std::iter::FusedIterator;

use crate::{Range, Version, MAX_SEQUENCE_LEN};

/// The patch releases of a [`Range`], computed one at a time from the
/// previously emitted version. Never yields more than [`MAX_SEQUENCE_LEN`]
/// versions.
#[derive(Clone, Debug)]
pub struct Sequence<'a> {
    upper: &'a Version,
    next: Option<Version>,
    remaining: usize,
}

impl<'a> Sequence<'a> {
    pub(crate) fn new(range: &'a Range) -> Self {
        let next = match range.is_empty() {
            true => None,
            false => Some(range.lower().clone()),
        };

        Sequence {
            upper: range.upper(),
            next,
            remaining: MAX_SEQUENCE_LEN,
        }
    }
}

impl<'a> Iterator for Sequence<'a> {
    type Item = Version;

    fn next(&mut self) -> Option<Version> {
        let current = self.next.take()?;
        let upper = self.upper;

        self.remaining -= 1;

        if self.remaining > 0 {
            self.next = current.next_patch()
                .filter(|candidate| candidate < upper);
        } else {
            log::debug!("Sequence below {:?} capped at {} versions", upper, MAX_SEQUENCE_LEN);
        }

        if self.next.is_none() {
            log::trace!("Sequence below {:?} ends at {:?}", upper, current);
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(_) => (1, Some(self.remaining)),
            None => (0, Some(0)),
        }
    }
}

impl<'a> FusedIterator for Sequence<'a> {
}
