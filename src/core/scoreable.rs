//! The single capability shared by every ranked result type.

/// A value with an overall score.
///
/// Implemented by evaluation results, deck recommendations and war-deck
/// candidates so callers can sort or compare them uniformly.
pub trait Scoreable {
    /// The score this value is ranked by. Higher is better.
    fn overall_score(&self) -> f64;
}

impl<T: Scoreable + ?Sized> Scoreable for &T {
    fn overall_score(&self) -> f64 {
        (**self).overall_score()
    }
}

/// Sort scoreables best-first. Equal scores keep their input order.
pub fn rank_by_score<T: Scoreable>(items: &mut [T]) {
    items.sort_by(|a, b| b.overall_score().total_cmp(&a.overall_score()));
}

/// The best-scoring item, earliest on ties.
pub fn best_of<T: Scoreable>(items: &[T]) -> Option<&T> {
    items.iter().fold(None, |best: Option<&T>, item| match best {
        Some(b) if b.overall_score() >= item.overall_score() => Some(b),
        _ => Some(item),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scored(&'static str, f64);

    impl Scoreable for Scored {
        fn overall_score(&self) -> f64 {
            self.1
        }
    }

    #[test]
    fn test_rank_is_stable() {
        let mut items = vec![Scored("a", 1.0), Scored("b", 3.0), Scored("c", 1.0), Scored("d", 2.0)];
        rank_by_score(&mut items);
        let order: Vec<_> = items.iter().map(|s| s.0).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_best_of_prefers_first() {
        let items = vec![Scored("a", 2.0), Scored("b", 2.0)];
        assert_eq!(best_of(&items).map(|s| s.0), Some("a"));
        assert!(best_of::<Scored>(&[]).is_none());
    }
}
