use std::rc::Rc;

use super::Value;

/// An iterator over an iterable [`Value`].
///
/// It holds on to the shared string or array, so it doesn't borrow the
/// value it was created from.
#[derive(Debug, Clone)]
pub enum ValueIter {
    Chars { text: Rc<str>, offset: usize },
    Items { items: Rc<[Value]>, index: usize },
}

impl ValueIter {
    pub(crate) fn chars(text: Rc<str>) -> Self {
        ValueIter::Chars { text, offset: 0 }
    }

    pub(crate) fn items(items: Rc<[Value]>) -> Self {
        ValueIter::Items { items, index: 0 }
    }
}

impl Iterator for ValueIter {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ValueIter::Chars { text, offset } => {
                let c = text[*offset..].chars().next()?;
                *offset += c.len_utf8();
                Some(c.into())
            }
            ValueIter::Items { items, index } => {
                let item = items.get(*index)?.clone();
                *index += 1;
                Some(item)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            ValueIter::Chars { text, offset } => {
                let remaining = text.len() - *offset;
                // every char takes between one and four bytes
                (remaining.div_ceil(4), Some(remaining))
            }
            ValueIter::Items { items, index } => {
                let remaining = items.len() - *index;
                (remaining, Some(remaining))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chars() {
        let iter = Value::from("aé😀").try_iter().unwrap();
        let chars = iter.collect::<Vec<_>>();
        assert_eq!(
            chars,
            vec![Value::from("a"), Value::from("é"), Value::from("😀")]
        );
    }

    #[test]
    fn test_items() {
        let iter = Value::from(vec![1, 2]).try_iter().unwrap();
        assert_eq!(iter.size_hint(), (2, Some(2)));
        assert_eq!(iter.collect::<Vec<_>>(), vec![Value::from(1), Value::from(2)]);
    }

    #[test]
    fn test_empty_string() {
        let mut iter = Value::from("").try_iter().unwrap();
        assert_eq!(iter.next(), None);
    }
}
