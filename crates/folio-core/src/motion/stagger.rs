use super::intent::AnimationIntent;
use std::time::Duration;

/// Where a staggered group starts animating from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StaggerFrom {
    #[default]
    Start,
    Center,
    Edges,
    End,
}

impl StaggerFrom {
    /// Position of unit `index` in the start order (0 animates first).
    pub fn rank(self, index: usize, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        let i = index.min(count - 1) as f32;
        let last = (count - 1) as f32;
        let mid = last * 0.5;
        match self {
            StaggerFrom::Start => i,
            StaggerFrom::End => last - i,
            StaggerFrom::Center => (i - mid).abs(),
            StaggerFrom::Edges => mid - (i - mid).abs(),
        }
    }
}

/// Start offsets for `count` units of `intent`, ordered by `from`.
pub fn stagger_offsets(intent: &AnimationIntent, count: usize, from: StaggerFrom) -> Vec<Duration> {
    (0..count)
        .map(|i| intent.start_offset_ranked(from.rank(i, count)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::intent::{MotionState, Trigger};

    #[test]
    fn center_out_starts_in_the_middle() {
        let ranks: Vec<f32> = (0..5).map(|i| StaggerFrom::Center.rank(i, 5)).collect();
        assert_eq!(ranks, vec![2.0, 1.0, 0.0, 1.0, 2.0]);
        let ranks: Vec<f32> = (0..5).map(|i| StaggerFrom::Edges.rank(i, 5)).collect();
        assert_eq!(ranks, vec![0.0, 1.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn offsets_follow_rank() {
        let intent = AnimationIntent::new(Trigger::OnMount, MotionState::HIDDEN, MotionState::VISIBLE)
            .with_stagger(Duration::from_millis(100));
        let offsets = stagger_offsets(&intent, 3, StaggerFrom::End);
        assert_eq!(
            offsets,
            vec![
                Duration::from_millis(200),
                Duration::from_millis(100),
                Duration::ZERO
            ]
        );
    }
}
