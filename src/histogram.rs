//! Pixel color frequency extraction and top-K ranking.

use std::collections::HashMap;

use crate::canvas::Canvas;
use crate::color::Color;

/// Color frequency table with a deterministic iteration order.
///
/// Iteration yields colors in first-occurrence order, which keeps every
/// downstream tie-break (closest color, top-K selection, channel inference)
/// reproducible. Built once per image, read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct ColorHistogram {
    counts: HashMap<Color, u32>,
    order: Vec<Color>,
}

impl ColorHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every pixel's RGB triplet across the canvas.
    ///
    /// The scan is column-major (x outer) so first-occurrence order matches
    /// the column-by-column population of the grid.
    pub fn of_canvas<C: Canvas>(canvas: &C) -> Self {
        let mut histogram = Self::new();
        let (width, height) = canvas.dimensions();
        for x in 0..width {
            for y in 0..height {
                histogram.add(canvas.get(x, y));
            }
        }
        histogram
    }

    /// Records one occurrence of `color`.
    pub fn add(&mut self, color: Color) {
        self.insert(color, 1);
    }

    fn insert(&mut self, color: Color, count: u32) {
        use std::collections::hash_map::Entry;
        match self.counts.entry(color) {
            Entry::Occupied(mut entry) => *entry.get_mut() += count,
            Entry::Vacant(entry) => {
                entry.insert(count);
                self.order.push(color);
            }
        }
    }

    /// Occurrence count for `color`, zero when absent.
    pub fn count(&self, color: Color) -> u32 {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Colors with their counts, in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, u32)> + '_ {
        self.order.iter().map(move |&color| (color, self.counts[&color]))
    }

    /// The `k` most frequent colors, selected by repeated strict-maximum
    /// search (the first maximum in iteration order wins each round).
    ///
    /// Returns the whole table unchanged in ranking when `k` exceeds its
    /// size; never pads.
    pub fn top_k(&self, k: usize) -> ColorHistogram {
        let mut top = ColorHistogram::new();
        while top.len() < k && top.len() < self.len() {
            let mut best: Option<(Color, u32)> = None;
            for (color, count) in self.iter() {
                if top.counts.contains_key(&color) {
                    continue;
                }
                if best.map_or(true, |(_, best_count)| count > best_count) {
                    best = Some((color, count));
                }
            }
            match best {
                Some((color, count)) => top.insert(color, count),
                None => break,
            }
        }
        top
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, ImageCanvas};

    const WHITE: Color = Color::new(255, 255, 255);
    const BLACK: Color = Color::new(0, 0, 0);

    #[test]
    fn test_solid_canvas() {
        let mut canvas = ImageCanvas::blank(50, 50);
        for y in 0..50 {
            for x in 0..50 {
                canvas.set(x, y, WHITE);
            }
        }

        let histogram = ColorHistogram::of_canvas(&canvas);
        assert_eq!(histogram.len(), 1);
        assert_eq!(histogram.count(WHITE), 2500);
    }

    #[test]
    fn test_two_color_canvas() {
        // 100x100 white canvas with a solid black quarter
        let mut canvas = ImageCanvas::blank(100, 100);
        for y in 0..100 {
            for x in 0..100 {
                let color = if x < 50 && y < 50 { BLACK } else { WHITE };
                canvas.set(x, y, color);
            }
        }

        let histogram = ColorHistogram::of_canvas(&canvas);
        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram.count(BLACK), 2500);
        assert_eq!(histogram.count(WHITE), 7500);
    }

    fn decreasing_histogram() -> ColorHistogram {
        // 10 colors with strictly decreasing counts 10..1
        let mut histogram = ColorHistogram::new();
        for i in 0..10u8 {
            let color = Color::new(i * 20, 0, 0);
            for _ in 0..(10 - i as u32) {
                histogram.add(color);
            }
        }
        histogram
    }

    #[test]
    fn test_top_k_selects_highest_counts() {
        let histogram = decreasing_histogram();
        let top = histogram.top_k(5);
        assert_eq!(top.len(), 5);
        for i in 0..5u8 {
            let color = Color::new(i * 20, 0, 0);
            assert_eq!(top.count(color), 10 - i as u32);
        }
    }

    #[test]
    fn test_top_k_larger_than_histogram() {
        let histogram = decreasing_histogram();
        let top = histogram.top_k(15);
        assert_eq!(top.len(), 10);
        for (color, count) in histogram.iter() {
            assert_eq!(top.count(color), count);
        }
    }

    #[test]
    fn test_top_k_ranking_order() {
        let histogram = decreasing_histogram();
        let ranked: Vec<u32> = histogram.top_k(10).iter().map(|(_, count)| count).collect();
        assert_eq!(ranked, vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }
}
