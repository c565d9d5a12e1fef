//! The list menu: a popup overlay presenting a vertical list of entries
//! with a single movable selection.

use sprig_core::{
    Context, EventOutcome, OverlayWidget, Point, Rect, Result,
    event::{
        key::{Key, KeyCode},
        mouse::{Action, Button, MouseEvent},
    },
};
use unicode_width::UnicodeWidthStr;

use crate::{base::OverlayBase, palette::MenuStyles};

/// The widest display width across a label set.
fn max_label_width(labels: &[String]) -> u32 {
    labels.iter().map(|l| l.width()).max().unwrap_or(0) as u32
}

/// Pad a label to `width` display columns, left-justified, with one
/// leading and one trailing space column.
fn pad_label(label: &str, width: u32) -> String {
    let fill = (width as usize).saturating_sub(label.width());
    let mut out = String::with_capacity(label.len() + fill + 2);
    out.push(' ');
    out.push_str(label);
    out.extend(std::iter::repeat_n(' ', fill));
    out.push(' ');
    out
}

/// A popup list menu.
///
/// Rows are rendered one below the other starting on the row under the
/// anchor (the anchor row itself is reserved by host framing
/// conventions). The selection wraps circularly in both directions, and
/// both commit channels — the Enter key and a primary-button release on a
/// row — resolve through the Enter pathway: a mouse commit re-queues an
/// Enter keystroke with [`Context::feed_key`] rather than committing
/// directly.
#[derive(Debug)]
pub struct ListMenu {
    base: OverlayBase,
    labels: Vec<String>,
    selection: Option<usize>,
    visible: usize,
    width: u32,
}

impl ListMenu {
    /// A down menu anchored at `anchor`. Call [`ListMenu::open`] to show it.
    pub fn new(anchor: Point) -> Self {
        Self {
            base: OverlayBase::new(anchor),
            labels: Vec::new(),
            selection: None,
            visible: 0,
            width: 0,
        }
    }

    /// (Re)activate the menu with the given entries and draw it. A live
    /// menu is killed first, so re-opening never leaks render handles.
    /// The labels are copied; the menu never aliases caller storage.
    pub fn open(&mut self, ctx: &mut dyn Context, labels: &[String]) -> Result<()> {
        self.kill(ctx)?;
        self.base.set_up(true);
        self.labels = labels.to_vec();
        self.selection = None;
        self.visible = self.labels.len();
        self.width = max_label_width(&self.labels);
        tracing::debug!(rows = self.visible, "list menu opened");
        self.draw(ctx)
    }

    /// The selected index, if any. After a commit, this is the committed
    /// entry; it survives teardown so callers can read it.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Is the menu live and consuming input?
    pub fn is_up(&self) -> bool {
        self.base.is_up()
    }

    /// The menu's fixed screen origin.
    pub fn anchor(&self) -> Point {
        self.base.anchor()
    }

    /// The clickable footprint: the label rows, one row below the anchor,
    /// spanning the label columns inclusive of the trailing one.
    fn footprint(&self) -> Rect {
        let anchor = self.base.anchor();
        Rect::new(anchor.x, anchor.y + 1, self.width + 1, self.visible as u32)
    }

    /// Move the selection backward, wrapping to the last row. No-op on an
    /// empty menu.
    fn select_prev(&mut self) {
        if self.visible == 0 {
            return;
        }
        self.selection = Some(match self.selection {
            Some(i) if i > 0 => i - 1,
            _ => self.visible - 1,
        });
    }

    /// Move the selection forward, wrapping to the first row. No-op on an
    /// empty menu.
    fn select_next(&mut self) {
        if self.visible == 0 {
            return;
        }
        self.selection = Some(match self.selection {
            Some(i) if i + 1 < self.visible => i + 1,
            _ => 0,
        });
    }
}

impl OverlayWidget for ListMenu {
    fn draw(&mut self, ctx: &mut dyn Context) -> Result<()> {
        // Rows, widths or styles may all have changed; never reuse a
        // handle across draws.
        for handle in self.base.take_handles() {
            ctx.remove_text(handle)?;
        }

        let styles = MenuStyles::resolve(ctx.theme());
        self.width = max_label_width(&self.labels);

        let anchor = self.base.anchor();
        for (i, label) in self.labels.iter().enumerate() {
            let style = if Some(i) == self.selection {
                styles.selected
            } else {
                styles.normal
            };
            let at = anchor.down(i as u32 + 1);
            let handle = ctx.place_text(at, style, &pad_label(label, self.width))?;
            self.base.push(handle);
        }
        Ok(())
    }

    fn handle_key(&mut self, ctx: &mut dyn Context, key: Key) -> Result<EventOutcome> {
        if ctx.interactive_active() || !self.base.is_up() {
            return Ok(EventOutcome::Ignore);
        }

        if key == KeyCode::Esc {
            self.kill(ctx)?;
            Ok(EventOutcome::Handle)
        } else if key == KeyCode::Enter {
            let chosen = self.selection.is_some();
            self.kill(ctx)?;
            Ok(if chosen {
                EventOutcome::Commit
            } else {
                EventOutcome::Handle
            })
        } else if key == KeyCode::Up || key == KeyCode::BackTab {
            self.select_prev();
            self.draw(ctx)?;
            Ok(EventOutcome::Handle)
        } else if key == KeyCode::Down || key == KeyCode::Tab {
            self.select_next();
            self.draw(ctx)?;
            Ok(EventOutcome::Handle)
        } else {
            Ok(EventOutcome::Ignore)
        }
    }

    fn handle_mouse(&mut self, ctx: &mut dyn Context, ev: MouseEvent) -> Result<EventOutcome> {
        if !self.base.is_up() {
            return Ok(EventOutcome::Ignore);
        }

        match ev.action {
            Action::Up if ev.button == Button::Left => {
                if self.footprint().contains(ev.location) {
                    let anchor = self.base.anchor();
                    self.selection = Some((ev.location.y - anchor.y - 1) as usize);
                    self.draw(ctx)?;
                    // Funnel the commit through the Enter pathway.
                    ctx.feed_key(Key::new(KeyCode::Enter));
                } else {
                    self.kill(ctx)?;
                }
                Ok(EventOutcome::Handle)
            }
            Action::ScrollUp => {
                tracing::trace!("wheel up");
                self.select_prev();
                self.draw(ctx)?;
                Ok(EventOutcome::Handle)
            }
            Action::ScrollDown => {
                tracing::trace!("wheel down");
                self.select_next();
                self.draw(ctx)?;
                Ok(EventOutcome::Handle)
            }
            _ => Ok(EventOutcome::Ignore),
        }
    }

    fn kill(&mut self, ctx: &mut dyn Context) -> Result<()> {
        if !self.base.is_up() {
            return Ok(());
        }
        self.labels.clear();
        for handle in self.base.take_handles() {
            ctx.remove_text(handle)?;
        }
        self.base.set_up(false);
        tracing::debug!("list menu closed");
        Ok(())
    }

    fn mark_dirty(&mut self, ctx: &mut dyn Context) -> Result<()> {
        for handle in self.base.handles().iter().copied() {
            ctx.mark_dirty(handle)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sprig_core::{event::key, tutils::TestHost};

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    /// A live menu over `names`, anchored at column `left`, row `top`.
    fn menu_at(host: &mut TestHost, top: u32, left: u32, names: &[&str]) -> ListMenu {
        let mut menu = ListMenu::new(Point { x: left, y: top });
        menu.open(host, &labels(names)).unwrap();
        menu
    }

    fn press(menu: &mut ListMenu, host: &mut TestHost, code: KeyCode) -> EventOutcome {
        menu.handle_key(host, Key::new(code)).unwrap()
    }

    fn release_at(x: u32, y: u32) -> MouseEvent {
        MouseEvent {
            action: Action::Up,
            button: Button::Left,
            modifiers: key::Empty,
            location: Point { x, y },
        }
    }

    fn wheel(action: Action) -> MouseEvent {
        MouseEvent {
            action,
            button: Button::None,
            modifiers: key::Empty,
            location: Point::zero(),
        }
    }

    #[test]
    fn open_draws_all_rows() {
        let mut host = TestHost::new();
        let menu = menu_at(&mut host, 5, 2, &["alpha", "beta", "c"]);

        assert!(menu.is_up());
        assert_eq!(menu.selection(), None);

        let live = host.live();
        assert_eq!(live.len(), 3);
        // Rows start one below the anchor, padded to the widest label.
        assert_eq!(live[0].at, Point { x: 2, y: 6 });
        assert_eq!(live[2].at, Point { x: 2, y: 8 });
        assert_eq!(live[0].text, " alpha ");
        assert_eq!(live[2].text, " c     ");

        // Nothing selected yet: every row uses the normal style.
        let styles = MenuStyles::resolve(&host.theme);
        assert!(live.iter().all(|p| p.style == styles.normal));
    }

    #[test]
    fn render_mirrors_selection() {
        let mut host = TestHost::new();
        let mut menu = menu_at(&mut host, 0, 0, &["a", "b", "c", "d"]);
        press(&mut menu, &mut host, KeyCode::Down);
        press(&mut menu, &mut host, KeyCode::Down);

        let styles = MenuStyles::resolve(&host.theme);
        let live = host.live();
        assert_eq!(live.len(), 4);
        for (i, placement) in live.iter().enumerate() {
            if i == 1 {
                assert_eq!(placement.style, styles.selected);
            } else {
                assert_eq!(placement.style, styles.normal);
            }
        }
    }

    #[test]
    fn width_uses_display_width() {
        let mut host = TestHost::new();
        // "日本" is two columns per character.
        menu_at(&mut host, 0, 0, &["日本", "ab"]);
        let live = host.live();
        assert_eq!(live[0].text, " 日本 ");
        assert_eq!(live[1].text, " ab   ");
    }

    #[test]
    fn arrows_and_tabs_wrap() {
        let mut host = TestHost::new();
        let mut menu = menu_at(&mut host, 0, 0, &["a", "b", "c"]);

        // First backward move from "nothing selected" wraps to the end.
        press(&mut menu, &mut host, KeyCode::Up);
        assert_eq!(menu.selection(), Some(2));
        press(&mut menu, &mut host, KeyCode::Up);
        assert_eq!(menu.selection(), Some(1));

        press(&mut menu, &mut host, KeyCode::Tab);
        assert_eq!(menu.selection(), Some(2));
        press(&mut menu, &mut host, KeyCode::Tab);
        assert_eq!(menu.selection(), Some(0));
        press(&mut menu, &mut host, KeyCode::BackTab);
        assert_eq!(menu.selection(), Some(2));
    }

    #[test]
    fn down_n_times_round_trips() {
        let mut host = TestHost::new();
        let names = ["a", "b", "c", "d", "e"];
        let mut menu = menu_at(&mut host, 0, 0, &names);
        press(&mut menu, &mut host, KeyCode::Down);
        let start = menu.selection();
        for _ in 0..names.len() {
            press(&mut menu, &mut host, KeyCode::Down);
        }
        assert_eq!(menu.selection(), start);
        for _ in 0..names.len() {
            press(&mut menu, &mut host, KeyCode::Up);
        }
        assert_eq!(menu.selection(), start);
    }

    #[test]
    fn empty_menu_is_safe() {
        let mut host = TestHost::new();
        let mut menu = menu_at(&mut host, 0, 0, &[]);
        assert!(menu.is_up());
        assert!(host.live().is_empty());

        for _ in 0..3 {
            assert_eq!(press(&mut menu, &mut host, KeyCode::Down), EventOutcome::Handle);
            assert_eq!(press(&mut menu, &mut host, KeyCode::Up), EventOutcome::Handle);
            menu.handle_mouse(&mut host, wheel(Action::ScrollUp)).unwrap();
            menu.handle_mouse(&mut host, wheel(Action::ScrollDown)).unwrap();
        }
        assert_eq!(menu.selection(), None);

        // Enter with nothing selected consumes without committing.
        assert_eq!(press(&mut menu, &mut host, KeyCode::Enter), EventOutcome::Handle);
        assert!(!menu.is_up());
    }

    #[test]
    fn keyboard_commit() {
        let mut host = TestHost::new();
        let mut menu = menu_at(&mut host, 0, 0, &["a", "b", "c"]);

        press(&mut menu, &mut host, KeyCode::Down);
        press(&mut menu, &mut host, KeyCode::Down);
        assert_eq!(press(&mut menu, &mut host, KeyCode::Enter), EventOutcome::Commit);
        assert_eq!(menu.selection(), Some(2));
        assert!(!menu.is_up());
        assert!(host.live().is_empty());
    }

    #[test]
    fn escape_dismisses_without_commit() {
        let mut host = TestHost::new();
        let mut menu = menu_at(&mut host, 0, 0, &["a", "b"]);
        press(&mut menu, &mut host, KeyCode::Down);
        assert_eq!(press(&mut menu, &mut host, KeyCode::Esc), EventOutcome::Handle);
        assert!(!menu.is_up());
        assert!(host.live().is_empty());
    }

    #[test]
    fn unrelated_keys_pass_through() {
        let mut host = TestHost::new();
        let mut menu = menu_at(&mut host, 0, 0, &["a", "b"]);
        assert_eq!(press(&mut menu, &mut host, KeyCode::Char('x')), EventOutcome::Ignore);
        assert_eq!(press(&mut menu, &mut host, KeyCode::PageDown), EventOutcome::Ignore);
        assert_eq!(menu.selection(), None);
        assert!(menu.is_up());
    }

    #[test]
    fn keys_refused_while_interactive_command_runs() {
        let mut host = TestHost::new();
        let mut menu = menu_at(&mut host, 0, 0, &["a", "b"]);
        host.interactive = true;
        assert_eq!(press(&mut menu, &mut host, KeyCode::Down), EventOutcome::Ignore);
        assert_eq!(press(&mut menu, &mut host, KeyCode::Enter), EventOutcome::Ignore);
        assert_eq!(menu.selection(), None);
        assert!(menu.is_up());

        // The mouse path deliberately skips that guard.
        menu.handle_mouse(&mut host, wheel(Action::ScrollDown)).unwrap();
        assert_eq!(menu.selection(), Some(0));
    }

    #[test]
    fn mouse_commit_funnels_through_enter() {
        let mut host = TestHost::new();
        let mut menu = menu_at(&mut host, 5, 2, &["a", "b", "c"]);

        // Row 7 is the second body row: index 1.
        let outcome = menu.handle_mouse(&mut host, release_at(3, 7)).unwrap();
        assert_eq!(outcome, EventOutcome::Handle);
        assert_eq!(menu.selection(), Some(1));
        // Still up until the synthesized Enter is delivered.
        assert!(menu.is_up());
        let fed = host.take_fed();
        assert_eq!(fed, vec![Key::new(KeyCode::Enter)]);

        // Host re-delivers the Enter; now the commit happens.
        let outcome = menu.handle_key(&mut host, fed[0]).unwrap();
        assert_eq!(outcome, EventOutcome::Commit);
        assert_eq!(menu.selection(), Some(1));
        assert!(!menu.is_up());
    }

    #[test]
    fn click_hit_testing_edges() {
        let mut host = TestHost::new();
        // Width 1, three rows: rows 6..=8, columns 2..=3.
        let mut menu = menu_at(&mut host, 5, 2, &["a", "b", "c"]);

        // Inclusive corners of the footprint select.
        menu.handle_mouse(&mut host, release_at(2, 6)).unwrap();
        assert_eq!(menu.selection(), Some(0));
        host.take_fed();
        menu.handle_mouse(&mut host, release_at(3, 8)).unwrap();
        assert_eq!(menu.selection(), Some(2));
        host.take_fed();

        // The anchor row itself is outside: this dismisses.
        let outcome = menu.handle_mouse(&mut host, release_at(2, 5)).unwrap();
        assert_eq!(outcome, EventOutcome::Handle);
        assert!(!menu.is_up());
        assert!(host.take_fed().is_empty());
    }

    #[test]
    fn outside_click_dismisses() {
        let mut host = TestHost::new();
        let mut menu = menu_at(&mut host, 5, 2, &["a", "b", "c"]);
        let outcome = menu.handle_mouse(&mut host, release_at(40, 20)).unwrap();
        assert_eq!(outcome, EventOutcome::Handle);
        assert!(!menu.is_up());
        assert!(host.live().is_empty());
        assert!(host.take_fed().is_empty());
    }

    #[test]
    fn non_release_mouse_ignored() {
        let mut host = TestHost::new();
        let mut menu = menu_at(&mut host, 5, 2, &["a", "b"]);

        let mut press_ev = release_at(3, 6);
        press_ev.action = Action::Down;
        assert_eq!(menu.handle_mouse(&mut host, press_ev).unwrap(), EventOutcome::Ignore);

        let mut right = release_at(3, 6);
        right.button = Button::Right;
        assert_eq!(menu.handle_mouse(&mut host, right).unwrap(), EventOutcome::Ignore);

        assert!(menu.is_up());
        assert_eq!(menu.selection(), None);
    }

    #[test]
    fn wheel_moves_selection() {
        let mut host = TestHost::new();
        let mut menu = menu_at(&mut host, 0, 0, &["a", "b", "c"]);
        menu.handle_mouse(&mut host, wheel(Action::ScrollDown)).unwrap();
        assert_eq!(menu.selection(), Some(0));
        menu.handle_mouse(&mut host, wheel(Action::ScrollUp)).unwrap();
        assert_eq!(menu.selection(), Some(2));
        menu.handle_mouse(&mut host, wheel(Action::ScrollUp)).unwrap();
        assert_eq!(menu.selection(), Some(1));
    }

    #[test]
    fn kill_is_idempotent() {
        let mut host = TestHost::new();
        let mut menu = menu_at(&mut host, 0, 0, &["a", "b"]);
        menu.kill(&mut host).unwrap();
        assert!(!menu.is_up());
        assert_eq!(host.removed.len(), 2);

        // A second kill performs no handle operations at all.
        menu.kill(&mut host).unwrap();
        assert_eq!(host.removed.len(), 2);
        assert!(!menu.is_up());

        // Input to a down menu is not consumed.
        assert_eq!(press(&mut menu, &mut host, KeyCode::Down), EventOutcome::Ignore);
        assert_eq!(
            menu.handle_mouse(&mut host, wheel(Action::ScrollDown)).unwrap(),
            EventOutcome::Ignore
        );
    }

    #[test]
    fn reopen_never_leaks_handles() {
        let mut host = TestHost::new();
        let mut menu = menu_at(&mut host, 0, 0, &["a", "b", "c"]);
        press(&mut menu, &mut host, KeyCode::Down);

        menu.open(&mut host, &labels(&["x", "y"])).unwrap();
        assert_eq!(host.live().len(), 2);
        assert_eq!(menu.selection(), None);
        assert_eq!(host.live()[0].text, " x ");
    }

    #[test]
    fn mark_dirty_touches_every_row() {
        let mut host = TestHost::new();
        let mut menu = menu_at(&mut host, 0, 0, &["a", "b", "c"]);
        menu.mark_dirty(&mut host).unwrap();
        assert_eq!(host.dirty.len(), 3);

        // No content change: the same handles are still live.
        assert_eq!(host.live().len(), 3);
    }

    proptest! {
        #[test]
        fn wraparound_closed_form(n in 1usize..24, steps in 1usize..96) {
            let mut host = TestHost::new();
            let names: Vec<String> = (0..n).map(|i| format!("item{i}")).collect();
            let mut menu = ListMenu::new(Point::zero());
            menu.open(&mut host, &names).unwrap();

            for _ in 0..steps {
                menu.handle_key(&mut host, Key::new(KeyCode::Down)).unwrap();
            }
            prop_assert_eq!(menu.selection(), Some((steps - 1) % n));

            menu.open(&mut host, &names).unwrap();
            for _ in 0..steps {
                menu.handle_key(&mut host, Key::new(KeyCode::Up)).unwrap();
            }
            prop_assert_eq!(menu.selection(), Some(n - 1 - ((steps - 1) % n)));
        }

        #[test]
        fn draw_always_mirrors_labels(n in 0usize..16, moves in 0usize..32) {
            let mut host = TestHost::new();
            let names: Vec<String> = (0..n).map(|i| format!("e{i}")).collect();
            let mut menu = ListMenu::new(Point { x: 1, y: 1 });
            menu.open(&mut host, &names).unwrap();

            for step in 0..moves {
                let code = if step % 3 == 0 { KeyCode::Up } else { KeyCode::Down };
                menu.handle_key(&mut host, Key::new(code)).unwrap();
                prop_assert_eq!(host.live().len(), n);
            }

            let styles = MenuStyles::resolve(&host.theme);
            let selected = host
                .live()
                .iter()
                .filter(|p| p.style == styles.selected)
                .count();
            prop_assert_eq!(selected, usize::from(menu.selection().is_some()));
        }
    }
}
