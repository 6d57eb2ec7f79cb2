//! One-axis flex container: rigid children first, flexed children share the rest

use super::geom::Rect;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

/// Where unused main-axis space goes when no flexed child absorbs it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Spacing {
    /// Children packed at the start, space after the last one
    #[default]
    Start,
    End,
    /// Half before the first child, half after the last
    Sides,
    /// Equal space around each child (half-size at the edges)
    Around,
    Between,
    Evenly,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Child {
    /// Fixed main-axis size, clamped to whatever is left
    Rigid(u32),
    /// Share of the space left after rigid children, relative to the other weights
    Flexed(f32),
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Flex {
    pub axis: Axis,
    pub spacing: Spacing,
}

impl Flex {
    pub fn vertical() -> Self {
        Self {
            axis: Axis::Vertical,
            ..Default::default()
        }
    }

    pub fn horizontal(spacing: Spacing) -> Self {
        Self {
            axis: Axis::Horizontal,
            spacing,
        }
    }

    /// Allocate one rect per child inside `bounds`, in order.
    pub fn layout(&self, bounds: Rect, children: &[Child]) -> Vec<Rect> {
        let (origin, main) = match self.axis {
            Axis::Horizontal => (bounds.x, bounds.w),
            Axis::Vertical => (bounds.y, bounds.h),
        };

        let mut sizes = vec![0u32; children.len()];
        let mut remaining = main;
        for (size, child) in sizes.iter_mut().zip(children) {
            if let Child::Rigid(want) = *child {
                *size = want.min(remaining);
                remaining -= *size;
            }
        }

        let weights: Vec<f64> = children
            .iter()
            .map(|c| match *c {
                Child::Flexed(w) => w as f64,
                Child::Rigid(_) => 0.0,
            })
            .collect();
        if weights.iter().any(|w| w.is_finite() && *w > 0.0) {
            let shares = largest_remainder(remaining, &weights);
            for (size, share) in sizes.iter_mut().zip(shares) {
                *size += share;
            }
            remaining = 0;
        }

        let gaps = largest_remainder(remaining, &self.gap_weights(children.len()));

        let mut cursor = origin.saturating_add(gaps.first().copied().unwrap_or(0));
        sizes
            .iter()
            .zip(gaps.iter().skip(1))
            .map(|(&size, &gap_after)| {
                let rect = match self.axis {
                    Axis::Horizontal => Rect::new(cursor, bounds.y, size, bounds.h),
                    Axis::Vertical => Rect::new(bounds.x, cursor, bounds.w, size),
                };
                cursor = cursor.saturating_add(size).saturating_add(gap_after);
                rect
            })
            .collect()
    }

    /// Relative weight of each gap slot: before the first child, between children, after the last.
    fn gap_weights(&self, n: usize) -> Vec<f64> {
        let mut slots = vec![0.0; n + 1];
        if n == 0 {
            return slots;
        }
        match self.spacing {
            Spacing::Start => slots[n] = 1.0,
            Spacing::End => slots[0] = 1.0,
            Spacing::Sides => {
                slots[0] = 1.0;
                slots[n] = 1.0;
            }
            Spacing::Around => {
                slots.iter_mut().for_each(|s| *s = 2.0);
                slots[0] = 1.0;
                slots[n] = 1.0;
            }
            Spacing::Between if n == 1 => slots[n] = 1.0,
            Spacing::Between => slots[1..n].iter_mut().for_each(|s| *s = 1.0),
            Spacing::Evenly => slots.iter_mut().for_each(|s| *s = 1.0),
        }
        slots
    }
}

/// Split `total` pixels proportionally to `weights` so the parts sum to exactly `total`.
///
/// Every part gets the floor of its quota; leftover pixels go one each to the
/// largest fractional remainders, earlier index first on ties. Non-positive or
/// non-finite weights get nothing. All-zero weights yield all-zero parts.
pub fn largest_remainder(total: u32, weights: &[f64]) -> Vec<u32> {
    let usable = |w: f64| if w.is_finite() && w > 0.0 { w } else { 0.0 };
    let sum: f64 = weights.iter().map(|&w| usable(w)).sum();
    if sum <= 0.0 {
        return vec![0; weights.len()];
    }

    let quotas: Vec<f64> = weights
        .iter()
        .map(|&w| total as f64 * usable(w) / sum)
        .collect();
    let mut parts: Vec<u32> = quotas.iter().map(|q| q.floor() as u32).collect();

    let mut by_remainder: Vec<usize> = (0..weights.len()).filter(|&i| usable(weights[i]) > 0.0).collect();
    // Stable sort keeps earlier children first among equal remainders
    by_remainder.sort_by(|&a, &b| {
        let ra = quotas[a] - quotas[a].floor();
        let rb = quotas[b] - quotas[b].floor();
        rb.total_cmp(&ra)
    });

    let assigned: u64 = parts.iter().map(|&p| p as u64).sum();
    if assigned <= total as u64 {
        let leftover = (total as u64 - assigned) as usize;
        for &i in by_remainder.iter().cycle().take(leftover) {
            parts[i] += 1;
        }
    } else {
        // Float drift can overshoot by a pixel; take it back from the smallest remainders
        let excess = (assigned - total as u64) as usize;
        let trim: Vec<usize> = by_remainder
            .iter()
            .rev()
            .copied()
            .filter(|&i| parts[i] > 0)
            .take(excess)
            .collect();
        for i in trim {
            parts[i] -= 1;
        }
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PANE_WEIGHTS;
    use pretty_assertions::assert_eq;

    fn panes() -> Vec<Child> {
        PANE_WEIGHTS.iter().map(|&w| Child::Flexed(w)).collect()
    }

    #[test]
    fn thousand_pixels_split_into_100_700_200() {
        let rects = Flex::vertical().layout(Rect::new(0, 0, 640, 1000), &panes());
        assert_eq!(
            rects,
            vec![
                Rect::new(0, 0, 640, 100),
                Rect::new(0, 100, 640, 700),
                Rect::new(0, 800, 640, 200),
            ]
        );
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(!a.overlaps(b));
            }
        }
    }

    #[test]
    fn pane_heights_always_sum_to_total() {
        for h in 1..=2000 {
            let rects = Flex::vertical().layout(Rect::new(0, 7, 100, h), &panes());
            let sum: u32 = rects.iter().map(|r| r.h).sum();
            assert_eq!(sum, h, "height {h}");
            assert_eq!(rects[0].y, 7);
            assert_eq!(rects[1].y, rects[0].bottom());
            assert_eq!(rects[2].bottom(), 7 + h);
        }
    }

    #[test]
    fn leftover_pixel_goes_to_largest_remainder() {
        // 7 * [0.1, 0.7, 0.2] = [0.7, 4.9, 1.4]
        assert_eq!(largest_remainder(7, &[0.1, 0.7, 0.2]), vec![1, 5, 1]);
        // Equal remainders resolve to the earlier part
        assert_eq!(largest_remainder(10, &[0.25, 0.75]), vec![3, 7]);
        assert_eq!(largest_remainder(10, &[1.0, 1.0, 1.0]), vec![4, 3, 3]);
    }

    #[test]
    fn zero_and_invalid_weights_get_nothing() {
        assert_eq!(largest_remainder(9, &[0.0, 0.0]), vec![0, 0]);
        assert_eq!(largest_remainder(9, &[f64::NAN, 1.0, -2.0]), vec![0, 9, 0]);
    }

    #[test]
    fn weights_need_not_sum_to_one() {
        let rects = Flex::vertical().layout(
            Rect::new(0, 0, 10, 100),
            &[Child::Flexed(1.0), Child::Flexed(3.0)],
        );
        assert_eq!(rects[0].h, 25);
        assert_eq!(rects[1].h, 75);
    }

    #[test]
    fn rigid_children_clamp_to_remaining_space() {
        let rects = Flex::vertical().layout(
            Rect::new(0, 0, 10, 50),
            &[Child::Rigid(40), Child::Rigid(40)],
        );
        assert_eq!(rects[0], Rect::new(0, 0, 10, 40));
        assert_eq!(rects[1], Rect::new(0, 40, 10, 10));
    }

    #[test]
    fn flexed_children_take_what_rigids_leave() {
        let rects = Flex::vertical().layout(
            Rect::new(0, 0, 10, 100),
            &[Child::Rigid(30), Child::Flexed(1.0)],
        );
        assert_eq!(rects[1], Rect::new(0, 30, 10, 70));
    }

    #[test]
    fn space_around_puts_half_gaps_at_edges() {
        let rects = Flex::horizontal(Spacing::Around).layout(
            Rect::new(0, 0, 100, 10),
            &[Child::Rigid(20), Child::Rigid(20)],
        );
        // 60 spare: 15 | 20 | 30 | 20 | 15
        assert_eq!(rects[0].x, 15);
        assert_eq!(rects[1].x, 65);
    }

    #[test]
    fn spacing_variants_place_single_child() {
        let bounds = Rect::new(0, 0, 100, 10);
        let child = [Child::Rigid(20)];
        let x = |spacing| Flex::horizontal(spacing).layout(bounds, &child)[0].x;
        assert_eq!(x(Spacing::Start), 0);
        assert_eq!(x(Spacing::End), 80);
        assert_eq!(x(Spacing::Sides), 40);
        assert_eq!(x(Spacing::Around), 40);
        assert_eq!(x(Spacing::Between), 0);
        assert_eq!(x(Spacing::Evenly), 40);
    }

    #[test]
    fn empty_children_produce_no_rects() {
        assert!(Flex::vertical().layout(Rect::new(0, 0, 10, 10), &[]).is_empty());
    }
}
