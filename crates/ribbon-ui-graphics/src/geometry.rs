//! Geometric primitives: Size, Rect, Span

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Full-height rect covering `span` along the horizontal axis.
    pub fn from_span(span: Span, height: f32) -> Self {
        Self {
            x: span.start,
            y: 0.0,
            width: span.len(),
            height,
        }
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Projection of the rect onto the horizontal scroll axis.
    pub fn horizontal_span(&self) -> Span {
        Span::new(self.x, self.max_x())
    }
}

/// Half-open interval `[start, end)` along the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Span {
    pub start: f32,
    pub end: f32,
}

impl Span {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    pub fn from_start_len(start: f32, len: f32) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    pub fn len(&self) -> f32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether the two half-open spans share at least one point.
    ///
    /// Empty spans never intersect anything.
    pub fn intersects(&self, other: &Span) -> bool {
        self.start < other.end && self.end > other.start && !self.is_empty() && !other.is_empty()
    }

    pub fn contains(&self, offset: f32) -> bool {
        offset >= self.start && offset < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_intersection_is_half_open() {
        let a = Span::new(0.0, 44.0);
        let b = Span::new(44.0, 88.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Span::new(43.5, 50.0)));
        assert!(b.intersects(&Span::new(0.0, 100.0)));
    }

    #[test]
    fn empty_span_never_intersects() {
        let empty = Span::new(10.0, 10.0);
        assert!(empty.is_empty());
        assert!(!empty.intersects(&Span::new(0.0, 20.0)));
        assert!(!Span::new(0.0, 20.0).intersects(&empty));
        assert!(!empty.contains(10.0));
    }

    #[test]
    fn rect_from_span_spans_full_height() {
        let rect = Rect::from_span(Span::new(88.0, 132.0), 60.0);
        assert_eq!(rect, Rect::new(88.0, 0.0, 44.0, 60.0));
        assert_eq!(rect.horizontal_span(), Span::new(88.0, 132.0));
        assert_eq!(rect.max_x(), 132.0);
    }
}
