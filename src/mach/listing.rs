use crate::error;
use crate::lang::{Error, Line};
use std::collections::{btree_map::Values, BTreeMap};
use std::ops::Bound::{Excluded, Unbounded};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// Bytes budgeted per stored line: string object overhead plus a
/// 72 character buffer at two bytes per character.
const BYTES_PER_LINE: usize = 20 + 72 * 2;

/// ## Program store
///
/// Numbered lines kept in ascending order with a fixed capacity.
/// Cloning is cheap; the terminal keeps a copy for completion.

#[derive(Debug, Clone)]
pub struct Listing {
    source: Arc<BTreeMap<u16, Line>>,
    capacity: usize,
}

impl Default for Listing {
    fn default() -> Listing {
        Listing::new(super::Config::default().program_lines)
    }
}

impl Listing {
    pub fn new(capacity: usize) -> Listing {
        Listing {
            source: Arc::default(),
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.source = Arc::default();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn get(&self, number: u16) -> Option<&Line> {
        self.source.get(&number)
    }

    /// Inserts or replaces line `number`. Empty text deletes it.
    pub fn put(&mut self, number: u16, text: &str) -> Result<()> {
        let line = Line::new(number, text);
        if line.is_empty() {
            if self.source.contains_key(&number) {
                Arc::make_mut(&mut self.source).remove(&number);
            }
            return Ok(());
        }
        if !self.source.contains_key(&number) && self.source.len() >= self.capacity {
            return Err(error!(ProgramOverflow));
        }
        Arc::make_mut(&mut self.source).insert(number, line);
        Ok(())
    }

    /// Ascending lines starting at the first one numbered `number` or more.
    pub fn iterate_from(&self, number: u16) -> impl Iterator<Item = &Line> {
        self.source.range(number..).map(|(_, line)| line)
    }

    pub fn first(&self) -> Option<&Line> {
        self.source.values().next()
    }

    /// The stored line following `number`.
    pub fn after(&self, number: u16) -> Option<&Line> {
        self.source
            .range((Excluded(number), Unbounded))
            .next()
            .map(|(_, line)| line)
    }

    pub fn lines(&self) -> Values<'_, u16, Line> {
        self.source.values()
    }

    /// Text of one line for editing, without its number.
    pub fn line(&self, num: usize) -> Option<String> {
        if num > u16::max_value() as usize {
            return None;
        }
        self.get(num as u16).map(|line| line.to_string())
    }

    /// Replaces the whole program, as LOAD does. A line longer than
    /// `max_len` characters fails the load and the program is kept.
    pub fn replace(&mut self, lines: Vec<Line>, max_len: usize) -> Result<()> {
        let mut source: BTreeMap<u16, Line> = BTreeMap::default();
        for line in lines {
            if line.text().chars().count() > max_len {
                return Err(error!(LineBufferOverflow));
            }
            if let Some(number) = line.number() {
                if line.is_empty() {
                    source.remove(&number);
                } else {
                    source.insert(number, line);
                }
            }
        }
        if source.len() > self.capacity {
            return Err(error!(ProgramOverflow));
        }
        self.source = Arc::from(source);
        Ok(())
    }

    pub fn bytes_total(&self) -> usize {
        BYTES_PER_LINE * self.capacity
    }

    pub fn bytes_free(&self) -> usize {
        BYTES_PER_LINE * self.capacity.saturating_sub(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use quickcheck_macros::quickcheck;

    fn numbers(listing: &Listing) -> Vec<u16> {
        listing.iterate_from(0).filter_map(|l| l.number()).collect()
    }

    #[test]
    fn test_replace_then_delete() {
        let mut l = Listing::default();
        l.put(10, "PRINT 1").unwrap();
        l.put(10, "PRINT 2").unwrap();
        assert_eq!(l.len(), 1);
        assert_eq!(l.get(10).unwrap().text(), "PRINT 2");
        l.put(10, "").unwrap();
        assert!(l.is_empty());
        l.put(10, "").unwrap();
        assert!(l.is_empty());
    }

    #[test]
    fn test_sorted_insert() {
        let mut l = Listing::default();
        l.put(30, "END").unwrap();
        l.put(10, "A=1").unwrap();
        l.put(20, "PRINT A").unwrap();
        assert_eq!(numbers(&l), vec![10, 20, 30]);
        let from: Vec<u16> = l.iterate_from(15).filter_map(|l| l.number()).collect();
        assert_eq!(from, vec![20, 30]);
        assert_eq!(l.after(20).and_then(|l| l.number()), Some(30));
        assert!(l.after(30).is_none());
        assert_eq!(l.first().and_then(|l| l.number()), Some(10));
    }

    #[test]
    fn test_capacity() {
        let mut l = Listing::new(2);
        l.put(1, "REM").unwrap();
        l.put(2, "REM").unwrap();
        assert_eq!(l.put(3, "REM").unwrap_err().code(), ErrorCode::ProgramOverflow);
        l.put(2, "END").unwrap();
        l.put(2, "").unwrap();
        l.put(3, "REM").unwrap();
        assert_eq!(numbers(&l), vec![1, 3]);
    }

    #[test]
    fn test_replace() {
        let mut l = Listing::new(2);
        l.put(5, "REM").unwrap();
        l.replace(vec![Line::new(20, "END"), Line::new(10, "PRINT 1")], 255)
            .unwrap();
        assert_eq!(numbers(&l), vec![10, 20]);
        let three = vec![Line::new(1, "A"), Line::new(2, "B"), Line::new(3, "C")];
        assert_eq!(
            l.replace(three, 255).unwrap_err().code(),
            ErrorCode::ProgramOverflow
        );
        assert_eq!(numbers(&l), vec![10, 20]);
    }

    #[test]
    fn test_replace_rejects_long_lines() {
        let mut l = Listing::default();
        l.put(5, "REM").unwrap();
        let long = vec![Line::new(1, "REM"), Line::new(2, &"X".repeat(9))];
        assert_eq!(
            l.replace(long.clone(), 8).unwrap_err().code(),
            ErrorCode::LineBufferOverflow
        );
        assert_eq!(numbers(&l), vec![5]);
        l.replace(long, 9).unwrap();
        assert_eq!(numbers(&l), vec![1, 2]);
    }

    #[test]
    fn test_memory() {
        let mut l = Listing::new(99);
        assert_eq!(l.bytes_total(), 164 * 99);
        l.put(10, "END").unwrap();
        assert_eq!(l.bytes_free(), 164 * 98);
    }

    #[test]
    fn test_shared_copy_is_unaffected() {
        let mut l = Listing::default();
        l.put(10, "END").unwrap();
        let copy = l.clone();
        l.put(20, "END").unwrap();
        assert_eq!(copy.len(), 1);
        assert_eq!(l.line(20), Some("20 END".to_string()));
    }

    #[quickcheck]
    fn prop_lines_stay_ascending(ops: Vec<(u16, bool)>) -> bool {
        let mut l = Listing::new(usize::max_value());
        for (number, keep) in ops {
            let text = if keep { "REM" } else { "" };
            if l.put(number, text).is_err() {
                return false;
            }
        }
        let n = numbers(&l);
        n.windows(2).all(|w| w[0] < w[1])
    }
}
