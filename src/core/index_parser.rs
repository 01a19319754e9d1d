//! Parsing of 1-based list selections such as `1 3-5,8`.
//!
//! Commands that act on entries of a numbered list (currently `favorite`)
//! accept indices the way the list prints them.
//!
//! # Supported Formats
//! - **Single indices**: `1`, `3`
//! - **Separated by spaces or commas**: `1 3 5`, `1,3,5`
//! - **Ranges**: `3-6` (expands to 3,4,5,6)
//! - **Mixed**: `1 3-5,8`
//!
//! Duplicates collapse and the result is sorted ascending. Ranges reaching
//! past the end of the list are rejected before they are expanded.

use crate::core::error::{MetaphorError, Result};
use std::collections::BTreeSet;

pub struct IndexParser;

impl IndexParser {
    /// Parse `input` for a list of `max` entries.
    pub fn parse(input: &str, max: usize) -> Result<Vec<usize>> {
        let mut indices = BTreeSet::new();

        for part in input.split([' ', ',']).map(str::trim).filter(|p| !p.is_empty()) {
            match part.split_once('-') {
                Some((start, end)) => {
                    if end.contains('-') {
                        return Err(MetaphorError::invalid_range_format(part));
                    }
                    let start = Self::parse_range_bound(start)?;
                    let end = Self::parse_range_bound(end)?;
                    if start > end {
                        return Err(MetaphorError::invalid_range_order(start, end));
                    }
                    if end > max {
                        return Err(MetaphorError::index_out_of_range(end, max));
                    }
                    indices.extend(start..=end);
                }
                None => {
                    let index = part
                        .parse()
                        .map_err(|_| MetaphorError::invalid_number(part))?;
                    indices.insert(index);
                }
            }
        }

        Ok(indices.into_iter().collect())
    }

    fn parse_range_bound(bound: &str) -> Result<usize> {
        bound
            .parse()
            .map_err(|_| MetaphorError::invalid_range_number(bound))
    }

    pub fn validate(indices: &[usize], len: usize) -> Result<()> {
        if len == 0 {
            return Err(MetaphorError::NoHistory);
        }

        for &index in indices {
            if index == 0 {
                return Err(MetaphorError::ZeroIndex);
            }
            if index > len {
                return Err(MetaphorError::index_out_of_range(index, len));
            }
        }
        Ok(())
    }

    /// Parse clap's positional arguments and check them against a list of `len` entries.
    pub fn parse_args(args: &[String], len: usize) -> Result<Vec<usize>> {
        if args.is_empty() {
            return Err(MetaphorError::NoIndicesProvided);
        }
        if len == 0 {
            return Err(MetaphorError::NoHistory);
        }

        let indices = Self::parse(&args.join(" "), len).map_err(|e| match e {
            MetaphorError::IndexOutOfRange { .. } => e,
            other => MetaphorError::invalid_index_format(other.to_string()),
        })?;
        if indices.is_empty() {
            return Err(MetaphorError::NoValidIndices);
        }

        Self::validate(&indices, len)?;
        Ok(indices)
    }

    /// Entries at validated 1-based `indices`.
    pub fn select<'a, T>(items: &'a [T], indices: &[usize]) -> Vec<&'a T> {
        indices
            .iter()
            .filter_map(|&index| index.checked_sub(1).and_then(|i| items.get(i)))
            .collect()
    }
}
