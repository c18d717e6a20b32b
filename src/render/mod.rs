use wordgrove::{
    types::{Size, Tint},
    Vec2, WordId, WordSnapshot,
};

/// Placeholder for the right half of a double-width glyph.
pub const WIDE_TAIL: char = '\0';

const POINTER_DEPTH: f32 = 1.0e9;
const READING_DEPTH_SCALE: f32 = 0.5;

/// Maps simulation pixels onto terminal cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub px_per_col: f32,
    pub px_per_row: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            px_per_col: 8.0,
            px_per_row: 16.0,
        }
    }
}

impl Projection {
    pub fn to_cell(&self, pos: Vec2) -> (i32, i32) {
        (
            (pos.x / self.px_per_col).floor() as i32,
            (pos.y / self.px_per_row).floor() as i32,
        )
    }

    /// Centre of cell `(col, row)` in simulation pixels.
    pub fn to_world(&self, col: u16, row: u16) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.px_per_col,
            (row as f32 + 0.5) * self.px_per_row,
        )
    }

    pub fn world_size(&self, viewport: Viewport) -> Size {
        Size::new(
            viewport.width as f32 * self.px_per_col,
            viewport.height as f32 * self.px_per_row,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorId {
    Word(Tint),
    Reading,
    Pointer,
}

#[derive(Clone, Copy, Debug)]
pub struct RenderCell {
    pub ch: char,
    pub depth: f32,
    pub color: ColorId,
}

const BLANK: RenderCell = RenderCell {
    ch: ' ',
    depth: f32::NEG_INFINITY,
    color: ColorId::Reading,
};

#[derive(Debug)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<RenderCell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut buffer = Self {
            width,
            height,
            cells: Vec::new(),
        };
        buffer.resize(width, height);
        buffer
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let len = (width as usize).saturating_mul(height as usize);
        if self.cells.len() != len {
            self.cells.resize(len, BLANK);
        }
        self.clear();
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> RenderCell {
        debug_assert!(x < self.width && y < self.height, "get() out of bounds");
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.cells[idx]
    }

    /// Writes `ch` unless a deeper glyph already owns the cell.
    fn set(&mut self, x: i32, y: i32, ch: char, depth: f32, color: ColorId) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        let cell = &mut self.cells[idx];
        if depth >= cell.depth {
            cell.depth = depth;
            cell.ch = ch;
            cell.color = color;
            true
        } else {
            false
        }
    }
}

/// Cells a drawn word occupies, for mapping taps back to words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitBox {
    pub id: WordId,
    pub x0: i32,
    pub x1: i32,
    pub y0: i32,
    pub y1: i32,
}

impl HitBox {
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

/// Topmost word under cell `(x, y)`. Later hit boxes were drawn on top.
pub fn hit_test(hits: &[HitBox], x: u16, y: u16) -> Option<WordId> {
    let (x, y) = (x as i32, y as i32);
    hits.iter().rev().find(|h| h.contains(x, y)).map(|h| h.id)
}

pub fn draw(
    snapshot: &[WordSnapshot],
    pointer: Option<Vec2>,
    projection: &Projection,
    viewport: Viewport,
    frame: &mut FrameBuffer,
    hits: &mut Vec<HitBox>,
) {
    if frame.width() != viewport.width || frame.height() != viewport.height {
        frame.resize(viewport.width, viewport.height);
    } else {
        frame.clear();
    }
    hits.clear();

    let mut order: Vec<&WordSnapshot> = snapshot.iter().collect();
    order.sort_by(|a, b| depth_of(a).total_cmp(&depth_of(b)));

    for word in order {
        let (cx, cy) = projection.to_cell(word.pos);
        let depth = depth_of(word);
        let text_x = cx - display_width(&word.text) / 2;
        let text_end = draw_text(frame, &word.text, text_x, cy, depth, ColorId::Word(word.tint));

        let reading_x = cx - display_width(&word.reading) / 2;
        let reading_end = draw_text(
            frame,
            &word.reading,
            reading_x,
            cy + 1,
            depth * READING_DEPTH_SCALE,
            ColorId::Reading,
        );

        hits.push(HitBox {
            id: word.id,
            x0: text_x.min(reading_x),
            x1: text_end.max(reading_end) - 1,
            y0: cy,
            y1: cy + 1,
        });
    }

    if let Some(p) = pointer {
        let (px, py) = projection.to_cell(p);
        frame.set(px, py, '+', POINTER_DEPTH, ColorId::Pointer);
    }
}

fn depth_of(word: &WordSnapshot) -> f32 {
    word.font_size * word.scale
}

/// Draws `text` from column `x`; returns the column after the last glyph.
fn draw_text(frame: &mut FrameBuffer, text: &str, x: i32, y: i32, depth: f32, color: ColorId) -> i32 {
    let mut col = x;
    for ch in text.chars() {
        if is_wide(ch) {
            if frame.set(col, y, ch, depth, color) {
                frame.set(col + 1, y, WIDE_TAIL, depth, color);
            }
            col += 2;
        } else {
            frame.set(col, y, ch, depth, color);
            col += 1;
        }
    }
    col
}

fn display_width(text: &str) -> i32 {
    text.chars().map(|ch| if is_wide(ch) { 2 } else { 1 }).sum()
}

/// East Asian wide ranges covering kana, CJK ideographs and full-width forms.
fn is_wide(ch: char) -> bool {
    matches!(ch as u32,
        0x1100..=0x115F
        | 0x2E80..=0x303E
        | 0x3041..=0x33FF
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xA000..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFE30..=0xFE4F
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6)
}

#[cfg(test)]
mod tests {
    use wordgrove::{Category, Mood};

    use super::*;

    fn snapshot(id: WordId, text: &str, reading: &str, pos: Vec2, font_size: f32) -> WordSnapshot {
        WordSnapshot {
            id,
            text: text.to_string(),
            reading: reading.to_string(),
            category: Category::English,
            mood: Mood::Calm,
            pos,
            rotation: 0.0,
            scale: 1.0,
            font_size,
            tint: Tint::Blue,
        }
    }

    fn viewport() -> Viewport {
        Viewport {
            width: 80,
            height: 24,
        }
    }

    mod projection {
        use super::*;

        #[test]
        fn maps_pixels_to_cells_and_back() {
            let p = Projection::default();
            assert_eq!(p.to_cell(Vec2::new(17.0, 33.0)), (2, 2));
            let world = p.to_world(2, 2);
            assert_eq!(p.to_cell(world), (2, 2));
        }

        #[test]
        fn world_size_scales_viewport() {
            let p = Projection::default();
            assert_eq!(p.world_size(viewport()), Size::new(640.0, 384.0));
        }
    }

    mod framebuffer {
        use super::*;

        #[test]
        fn resize_clears_cells() {
            let mut fb = FrameBuffer::new(10, 10);
            fb.set(1, 1, 'A', 1.0, ColorId::Reading);
            fb.resize(20, 15);
            assert_eq!(fb.width(), 20);
            assert_eq!(fb.height(), 15);
            assert_eq!(fb.get(1, 1).ch, ' ');
        }

        #[test]
        fn deeper_glyph_wins() {
            let mut fb = FrameBuffer::new(10, 10);
            fb.set(5, 5, 'A', 10.0, ColorId::Word(Tint::Red));
            fb.set(5, 5, 'B', 5.0, ColorId::Reading);
            let cell = fb.get(5, 5);
            assert_eq!(cell.ch, 'A');
            assert_eq!(cell.color, ColorId::Word(Tint::Red));
        }

        #[test]
        fn out_of_bounds_is_ignored() {
            let mut fb = FrameBuffer::new(10, 10);
            assert!(!fb.set(-1, 3, 'X', 1.0, ColorId::Pointer));
            assert!(!fb.set(100, 100, 'X', 1.0, ColorId::Pointer));
        }
    }

    mod draw_fn {
        use super::*;

        #[test]
        fn empty_snapshot_produces_empty_frame() {
            let mut frame = FrameBuffer::new(80, 24);
            let mut hits = Vec::new();
            draw(&[], None, &Projection::default(), viewport(), &mut frame, &mut hits);
            for y in 0..24 {
                for x in 0..80 {
                    assert_eq!(frame.get(x, y).ch, ' ');
                }
            }
            assert!(hits.is_empty());
        }

        #[test]
        fn word_is_centred_with_reading_below() {
            // cell (40, 12)
            let words = [snapshot(1, "cat", "キャット", Vec2::new(324.0, 200.0), 20.0)];
            let mut frame = FrameBuffer::new(80, 24);
            let mut hits = Vec::new();
            draw(&words, None, &Projection::default(), viewport(), &mut frame, &mut hits);

            assert_eq!(frame.get(39, 12).ch, 'c');
            assert_eq!(frame.get(40, 12).ch, 'a');
            assert_eq!(frame.get(41, 12).ch, 't');
            assert_eq!(frame.get(36, 13).ch, 'キ');
            assert_eq!(frame.get(37, 13).ch, WIDE_TAIL);
            assert_eq!(hit_test(&hits, 40, 12), Some(1));
            assert_eq!(hit_test(&hits, 36, 13), Some(1));
            assert_eq!(hit_test(&hits, 40, 14), None);
        }

        #[test]
        fn larger_word_is_drawn_on_top() {
            let words = [
                snapshot(1, "big", "", Vec2::new(324.0, 200.0), 28.0),
                snapshot(2, "sml", "", Vec2::new(324.0, 200.0), 12.0),
            ];
            let mut frame = FrameBuffer::new(80, 24);
            let mut hits = Vec::new();
            draw(&words, None, &Projection::default(), viewport(), &mut frame, &mut hits);
            assert_eq!(frame.get(40, 12).ch, 'i');
            assert_eq!(hit_test(&hits, 40, 12), Some(1));
        }

        #[test]
        fn pointer_overrides_word() {
            let words = [snapshot(1, "W", "", Vec2::new(324.0, 200.0), 20.0)];
            let mut frame = FrameBuffer::new(80, 24);
            let mut hits = Vec::new();
            draw(
                &words,
                Some(Vec2::new(324.0, 200.0)),
                &Projection::default(),
                viewport(),
                &mut frame,
                &mut hits,
            );
            let cell = frame.get(40, 12);
            assert_eq!(cell.ch, '+');
            assert_eq!(cell.color, ColorId::Pointer);
        }
    }

    mod width {
        use super::*;

        #[test]
        fn kana_and_kanji_are_double_width() {
            assert_eq!(display_width("cat"), 3);
            assert_eq!(display_width("さくら"), 6);
            assert_eq!(display_width("静寂"), 4);
            assert_eq!(display_width("キャット"), 8);
        }
    }
}
