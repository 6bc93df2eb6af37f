#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    pub fn contains(&self, p: Pos) -> bool {
        if self.is_empty() {
            return false;
        }
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    pub fn intersect(self, other: Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        Rect::new(x1, y1, x2.saturating_sub(x1), y2.saturating_sub(y1))
    }

    /// Shrinks by `dx` columns on each side and `dy` rows top and bottom.
    pub fn shrink(self, dx: u16, dy: u16) -> Rect {
        Rect::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.w.saturating_sub(dx.saturating_mul(2)),
            self.h.saturating_sub(dy.saturating_mul(2)),
        )
    }

    /// Bottom-anchored box of at most `w` x `h`, centred horizontally.
    pub fn bottom_sheet(self, w: u16, h: u16) -> Rect {
        let w = w.min(self.w);
        let h = h.min(self.h);
        let x = self.x + (self.w - w) / 2;
        let y = self.bottom() - h;
        Rect::new(x, y, w, h)
    }

    /// The same box pushed `dy` rows down.
    pub fn offset_y(self, dy: u16) -> Rect {
        Rect::new(self.x, self.y.saturating_add(dy), self.w, self.h)
    }

    pub fn row(self, dy: u16) -> Rect {
        if dy >= self.h {
            return Rect::new(self.x, self.bottom(), self.w, 0);
        }
        Rect::new(self.x, self.y + dy, self.w, 1)
    }

    /// Splits into `n` side-by-side columns separated by `gap`; the last column absorbs rounding.
    pub fn columns(self, n: usize, gap: u16) -> Vec<Rect> {
        if n == 0 {
            return Vec::new();
        }
        let gaps = gap.saturating_mul(n as u16 - 1);
        let usable = self.w.saturating_sub(gaps);
        let each = usable / n as u16;
        let mut x = self.x;
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let w = if i + 1 == n {
                self.right().saturating_sub(x)
            } else {
                each
            };
            out.push(Rect::new(x, self.y, w, self.h));
            x = x.saturating_add(w).saturating_add(gap);
        }
        out
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/geom.rs"]
mod tests;
