use std::num::NonZeroUsize;

/// One dot under the slider. The ordinal is fixed when the dots are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub ordinal: usize,
    pub active: bool,
}

/// Builds exactly one indicator per slide, in ordinal order, none active yet.
pub fn build_indicators(count: NonZeroUsize) -> Vec<Indicator> {
    (0..count.get())
        .map(|ordinal| Indicator {
            ordinal,
            active: false,
        })
        .collect()
}

/// Marks the indicator at `index` active and clears every other one.
///
/// An out-of-range index leaves the indicators untouched and returns `false`.
pub fn activate(indicators: &mut [Indicator], index: usize) -> bool {
    if index >= indicators.len() {
        return false;
    }
    for indicator in indicators.iter_mut() {
        indicator.active = indicator.ordinal == index;
    }
    true
}

/// Horizontal offset of a slide, in percent of the slider width.
pub fn slide_offset(ordinal: usize, current: usize) -> i64 {
    100 * (ordinal as i64 - current as i64)
}

/// CSS transform placing a slide at `offset` percent.
pub fn translate_x(offset: i64) -> String {
    format!("translateX({}%)", offset)
}

/// State for the testimonial slider
///
/// The current index always lies in `0..len` and exactly one indicator is
/// active, the one whose ordinal equals the current index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    indicators: Vec<Indicator>,
}

impl Carousel {
    /// Starts on slide 0 with its indicator active.
    pub fn new(count: NonZeroUsize) -> Self {
        let mut indicators = build_indicators(count);
        activate(&mut indicators, 0);
        Self {
            len: count.get(),
            current: 0,
            indicators,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    /// Moves to the next slide, wrapping from the last one to the first.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.len;
        self.refresh();
    }

    /// Moves to the previous slide, wrapping from the first one to the last.
    pub fn retreat(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
        self.refresh();
    }

    /// Jumps to `index`. Out-of-range indexes are ignored and return `false`.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.current = index;
        self.refresh();
        true
    }

    /// Offset of every slide for the current index, in ordinal order.
    pub fn offsets(&self) -> impl Iterator<Item = i64> + '_ {
        (0..self.len).map(move |ordinal| slide_offset(ordinal, self.current))
    }

    fn refresh(&mut self) {
        activate(&mut self.indicators, self.current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> Carousel {
        Carousel::new(NonZeroUsize::new(n).unwrap())
    }

    fn active_ordinals(c: &Carousel) -> Vec<usize> {
        c.indicators()
            .iter()
            .filter(|i| i.active)
            .map(|i| i.ordinal)
            .collect()
    }

    #[test]
    fn starts_on_first_slide() {
        let c = carousel(3);
        assert_eq!(c.current(), 0);
        assert_eq!(c.indicators().len(), 3);
        assert_eq!(active_ordinals(&c), vec![0]);
        assert_eq!(c.offsets().collect::<Vec<_>>(), vec![0, 100, 200]);
    }

    #[test]
    fn advance_wraps_after_last_slide() {
        let mut c = carousel(4);
        let mut seen = vec![c.current()];
        for _ in 0..4 {
            c.advance();
            seen.push(c.current());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn retreat_wraps_to_last_slide() {
        let mut c = carousel(4);
        c.retreat();
        assert_eq!(c.current(), 3);
        assert_eq!(active_ordinals(&c), vec![3]);
    }

    #[test]
    fn go_to_positions_slides_around_target() {
        let mut c = carousel(4);
        assert!(c.go_to(2));
        assert_eq!(c.current(), 2);
        assert_eq!(active_ordinals(&c), vec![2]);
        assert_eq!(c.offsets().collect::<Vec<_>>(), vec![-200, -100, 0, 100]);
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut c = carousel(4);
        c.advance();
        let before = c.clone();
        assert!(!c.go_to(7));
        assert_eq!(c, before);
        assert_eq!(active_ordinals(&c), vec![1]);
    }

    #[test]
    fn activate_out_of_range_keeps_markers() {
        let count = NonZeroUsize::new(4).unwrap();
        let mut dots = build_indicators(count);
        assert!(activate(&mut dots, 1));
        assert!(!activate(&mut dots, 4));
        assert_eq!(dots.iter().filter(|d| d.active).count(), 1);
        assert!(dots[1].active);
    }

    #[test]
    fn ring_laws_hold_for_small_sizes() {
        for n in 1..=6 {
            for start in 0..n {
                let mut c = carousel(n);
                c.go_to(start);

                for _ in 0..n {
                    c.advance();
                }
                assert_eq!(c.current(), start, "cycle law, n={n}");

                c.advance();
                c.retreat();
                assert_eq!(c.current(), start, "retreat undoes advance, n={n}");
            }
        }
    }

    #[test]
    fn mixed_moves_keep_index_and_single_active_dot() {
        let mut c = carousel(5);
        // deterministic mix of forward and backward steps
        let moves = [true, true, false, false, false, true, false, false, true, true, true, true];
        for forward in moves {
            if forward {
                c.advance();
            } else {
                c.retreat();
            }
            assert!(c.current() < c.len());
            assert_eq!(active_ordinals(&c), vec![c.current()]);
            assert_eq!(c.offsets().nth(c.current()), Some(0));
        }
    }

    #[test]
    fn single_slide_stays_put() {
        let mut c = carousel(1);
        c.advance();
        assert_eq!(c.current(), 0);
        c.retreat();
        assert_eq!(c.current(), 0);
        assert_eq!(active_ordinals(&c), vec![0]);
    }

    #[test]
    fn translate_x_formats_percent() {
        assert_eq!(translate_x(-200), "translateX(-200%)");
        assert_eq!(translate_x(slide_offset(3, 2)), "translateX(100%)");
    }
}
