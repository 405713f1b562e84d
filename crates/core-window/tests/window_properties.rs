//! Property-based tests for window invariants under arbitrary command sequences.

use core_window::{MemorySource, Mode, Window};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Cmd {
    Left(u64),
    Right(u64),
    Up(u64),
    Down(u64),
    Prev(u64),
    Next(u64),
    Head(u64),
    End(u64),
    Goto(u64),
    ScrollUp(u64),
    ScrollDown(u64),
    PageUp,
    PageDown,
    PageUpHalf,
    PageDownHalf,
    PageTop,
    PageEnd,
    Delete(u64),
    DeletePrev(u64),
    Increment(u64),
    Decrement(u64),
    SetMode(Mode),
    Stage(u8),
    Nibble(u8),
    Commit,
    Cancel,
}

impl Cmd {
    /// Whether the cursor must be visible right after this command.
    fn follows_cursor(&self) -> bool {
        matches!(
            self,
            Cmd::Up(_)
                | Cmd::Down(_)
                | Cmd::Prev(_)
                | Cmd::Next(_)
                | Cmd::Head(_)
                | Cmd::End(_)
                | Cmd::Goto(_)
                | Cmd::Commit
        )
    }
}

fn cmd() -> impl Strategy<Value = Cmd> {
    let n = prop_oneof![0u64..40, Just(u64::MAX)];
    prop_oneof![
        n.clone().prop_map(Cmd::Left),
        n.clone().prop_map(Cmd::Right),
        n.clone().prop_map(Cmd::Up),
        n.clone().prop_map(Cmd::Down),
        n.clone().prop_map(Cmd::Prev),
        n.clone().prop_map(Cmd::Next),
        n.clone().prop_map(Cmd::Head),
        n.clone().prop_map(Cmd::End),
        n.clone().prop_map(Cmd::Goto),
        n.clone().prop_map(Cmd::ScrollUp),
        n.clone().prop_map(Cmd::ScrollDown),
        Just(Cmd::PageUp),
        Just(Cmd::PageDown),
        Just(Cmd::PageUpHalf),
        Just(Cmd::PageDownHalf),
        Just(Cmd::PageTop),
        Just(Cmd::PageEnd),
        (0u64..8).prop_map(Cmd::Delete),
        (0u64..8).prop_map(Cmd::DeletePrev),
        n.clone().prop_map(Cmd::Increment),
        n.prop_map(Cmd::Decrement),
        prop_oneof![
            Just(Mode::Normal),
            Just(Mode::Insert),
            Just(Mode::Replace),
            Just(Mode::Visual),
        ]
        .prop_map(Cmd::SetMode),
        any::<u8>().prop_map(Cmd::Stage),
        (0u8..20).prop_map(Cmd::Nibble),
        Just(Cmd::Commit),
        Just(Cmd::Cancel),
    ]
}

fn apply(w: &mut Window<MemorySource>, c: &Cmd, h: usize) {
    match *c {
        Cmd::Left(n) => w.cursor_left(n),
        Cmd::Right(n) => w.cursor_right(n),
        Cmd::Up(n) => w.cursor_up(n, h),
        Cmd::Down(n) => w.cursor_down(n, h),
        Cmd::Prev(n) => w.cursor_prev(n, h),
        Cmd::Next(n) => w.cursor_next(n, h),
        Cmd::Head(n) => w.cursor_head(n, h),
        Cmd::End(n) => w.cursor_end(n, h),
        Cmd::Goto(n) => w.cursor_goto(n, h),
        Cmd::ScrollUp(n) => w.scroll_up(n, h),
        Cmd::ScrollDown(n) => w.scroll_down(n, h),
        Cmd::PageUp => w.page_up(h),
        Cmd::PageDown => w.page_down(h),
        Cmd::PageUpHalf => w.page_up_half(h),
        Cmd::PageDownHalf => w.page_down_half(h),
        Cmd::PageTop => w.page_top(),
        Cmd::PageEnd => w.page_end(h),
        Cmd::Delete(n) => w.delete_byte(n, h).unwrap(),
        Cmd::DeletePrev(n) => w.delete_prev_byte(n, h).unwrap(),
        Cmd::Increment(n) => w.increment(n).unwrap(),
        Cmd::Decrement(n) => w.decrement(n).unwrap(),
        Cmd::SetMode(m) => w.set_mode(m),
        Cmd::Stage(b) => {
            w.stage_byte(b);
        }
        Cmd::Nibble(x) => {
            w.input_nibble(x, h).unwrap();
        }
        Cmd::Commit => {
            w.commit_pending(h).unwrap();
        }
        Cmd::Cancel => w.cancel_pending(),
    }
}

fn max_offset(len: u64, width: u64, height: u64) -> u64 {
    let last_row = len.saturating_sub(1) / width;
    last_row.saturating_sub(height - 1) * width
}

proptest! {
    #[test]
    fn invariants_hold_after_every_command(
        len in 0usize..600,
        width in 1usize..20,
        height in 1usize..12,
        cmds in prop::collection::vec(cmd(), 1..60),
    ) {
        let mut w = Window::new(MemorySource::new(vec![0x55; len]), "p", width).unwrap();
        let (wd, ht) = (width as u64, height as u64);
        for c in &cmds {
            apply(&mut w, c, height);
            let len = w.len();
            prop_assert_eq!(w.source().as_bytes().len() as u64, len);
            prop_assert_eq!(w.offset() % wd, 0, "offset aligned after {:?}", c);
            prop_assert!(w.offset() <= max_offset(len, wd, ht), "offset bound after {:?}", c);
            prop_assert!(w.cursor() <= len.saturating_sub(1), "cursor bound after {:?}", c);
            if c.follows_cursor() {
                prop_assert!(w.offset() <= w.cursor() && w.cursor() < w.offset() + ht * wd,
                    "cursor visible after {:?}", c);
            }
            let edited = w.edited().as_slice();
            prop_assert!(edited.iter().all(|r| r.start < r.end && r.end <= len),
                "edited ranges non-empty and inside content after {:?}", c);
            prop_assert!(edited.windows(2).all(|p| p[0].end < p[1].start),
                "edited ranges sorted, disjoint, non-touching after {:?}", c);
            if w.pending().is_some() {
                prop_assert!(w.mode().accepts_staged_byte(), "staged byte outside entry mode after {:?}", c);
            }
            let s = w.state(height).unwrap();
            prop_assert_eq!(s.bytes.len(), height * width);
            prop_assert!(s.size <= s.bytes.len());
        }
    }

    #[test]
    fn increment_then_decrement_restores(n in 0u64..(i64::MAX as u64), at in 0u64..13, start in any::<u8>()) {
        let mut w = Window::new(MemorySource::new(vec![start; 13]), "p", 16).unwrap();
        w.cursor_goto(at, 10);
        w.increment(n).unwrap();
        w.decrement(n).unwrap();
        prop_assert_eq!(w.source().as_bytes()[at as usize], start);
    }

    #[test]
    fn right_then_left_returns_when_no_boundary_hit(col in 0u64..16, n in 1u64..16) {
        prop_assume!(col + n <= 15);
        let mut w = Window::new(MemorySource::new(vec![0; 64]), "p", 16).unwrap();
        w.cursor_goto(16 + col, 4);
        w.cursor_right(n);
        w.cursor_left(n);
        prop_assert_eq!(w.cursor(), 16 + col);
    }

    #[test]
    fn repeated_single_deletes_empty_the_window(len in 0usize..80, at in 0u64..80) {
        let mut w = Window::new(MemorySource::new(vec![1; len]), "p", 8).unwrap();
        w.cursor_goto(at, 5);
        for i in 0..len {
            let before = w.len();
            w.delete_byte(0, 5).unwrap();
            prop_assert_eq!(w.len(), before - 1, "delete #{} removes one byte", i);
        }
        prop_assert_eq!(w.len(), 0);
        w.delete_byte(0, 5).unwrap();
        prop_assert_eq!(w.len(), 0);
        prop_assert_eq!(w.cursor(), 0);
    }
}
