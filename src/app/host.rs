//! Demo host screen: shows the confirmed event date/time and opens the picker over it.

use std::time::Instant;

use chrono::NaiveDateTime;

use crate::core::event::{InputEvent, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use crate::kernel::{Action, DispatchResult, Effect, PickerMode, PickerProps, Store};
use crate::services::config::PickerConfig;
use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::Painter;
use crate::ui::core::style::{Mod, Style};
use crate::views::{PickerHit, PickerView};

const PAGE_STEP: isize = 5;

/// Pointer pressed inside a wheel column.
#[derive(Debug, Clone, Copy)]
struct Press {
    column: usize,
    last_row: u16,
    moved_at: Instant,
    dragged: bool,
    hit: PickerHit,
}

/// Mouse-wheel gesture waiting for its idle release.
#[derive(Debug, Clone, Copy)]
struct WheelScroll {
    column: usize,
    last: Instant,
}

pub struct DemoHost {
    store: Store,
    view: PickerView,
    painter: Painter,
    value: NaiveDateTime,
    focus: usize,
    press: Option<Press>,
    scrolls: Vec<WheelScroll>,
    should_quit: bool,
}

impl DemoHost {
    pub fn new(value: NaiveDateTime, mode: PickerMode, config: PickerConfig) -> Self {
        Self {
            store: Store::new(PickerProps::new(mode, value), config),
            view: PickerView::new(),
            painter: Painter::new(),
            value,
            focus: 0,
            press: None,
            scrolls: Vec::new(),
            should_quit: false,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn view(&self) -> &PickerView {
        &self.view
    }

    /// Last confirmed value.
    pub fn value(&self) -> NaiveDateTime {
        self.value
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn open(&mut self, mode: PickerMode) -> bool {
        tracing::debug!(?mode, "opening picker");
        self.focus = 0;
        let mut changed = self.dispatch(Action::SetMode(mode));
        changed |= self.dispatch(Action::SetValue(self.value));
        changed |= self.dispatch(Action::SetVisible(true));
        changed
    }

    /// Returns whether a redraw is needed.
    pub fn handle_input(&mut self, event: &InputEvent, now: Instant) -> bool {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse, now),
            InputEvent::Resize(..) => true,
        }
    }

    /// Releases idle wheel gestures and advances the kernel clock.
    pub fn tick(&mut self, now: Instant) -> bool {
        let idle = self.store.config().release_idle;
        let (released, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.scrolls)
            .into_iter()
            .partition(|s| now.saturating_duration_since(s.last) >= idle);
        self.scrolls = pending;

        let mut changed = false;
        for scroll in released {
            // A notch is a discrete move, not a fling: zero the velocity before lifting.
            changed |= self.dispatch(Action::WheelDrag {
                column: scroll.column,
                delta: 0.0,
            });
            changed |= self.dispatch(Action::WheelRelease {
                column: scroll.column,
            });
        }
        changed |= self.dispatch(Action::Tick { now });

        if !self.store.state().is_mounted() {
            self.press = None;
            self.scrolls.clear();
        }
        changed
    }

    pub fn render(&mut self, backend: &mut dyn Backend, area: Rect) {
        self.painter.clear();
        self.paint_screen(area);
        let state = self.store.state();
        self.view.paint(
            &mut self.painter,
            area,
            state,
            self.store.config(),
            self.focus,
        );
        backend.draw(area, self.painter.cmds());
    }

    fn paint_screen(&mut self, area: Rect) {
        let theme = self.view.theme();
        let title = Style::default().fg(theme.title_fg).add_mod(Mod::BOLD);
        let label = Style::default().fg(theme.item_fg);
        let value = Style::default().fg(theme.selected_fg).add_mod(Mod::BOLD);
        let hint = Style::default().fg(theme.cancel_fg);

        let lines = [
            (0, 1, "Event".to_string(), title),
            (2, 1, "Date".to_string(), label),
            (2, 8, self.value.format("%Y-%m-%d").to_string(), value),
            (3, 1, "Time".to_string(), label),
            (3, 8, self.value.format("%H:%M").to_string(), value),
            (5, 1, "d: pick date  t: pick time  q: quit".to_string(), hint),
        ];
        for (dy, dx, text, style) in lines {
            if dy >= area.h {
                continue;
            }
            let pos = Pos::new(area.x.saturating_add(dx), area.y + dy);
            self.painter.text_clipped(pos, text, style, area);
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.is_ctrl_char('c') {
            self.should_quit = true;
            return true;
        }
        if self.store.state().modal.is_interactive() {
            return self.handle_picker_key(key);
        }
        match key.code {
            KeyCode::Char('d') => self.open(PickerMode::Date),
            KeyCode::Char('t') => self.open(PickerMode::Time),
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            _ => false,
        }
    }

    fn handle_picker_key(&mut self, key: &KeyEvent) -> bool {
        let column = self.focus;
        match key.code {
            KeyCode::Enter => self.dispatch(Action::Confirm),
            KeyCode::Esc => self.dispatch(Action::Cancel),
            KeyCode::Left | KeyCode::BackTab => self.move_focus(-1),
            KeyCode::Right | KeyCode::Tab => self.move_focus(1),
            KeyCode::Up => self.dispatch(Action::WheelStep { column, delta: -1 }),
            KeyCode::Down => self.dispatch(Action::WheelStep { column, delta: 1 }),
            KeyCode::PageUp => self.dispatch(Action::WheelStep {
                column,
                delta: -PAGE_STEP,
            }),
            KeyCode::PageDown => self.dispatch(Action::WheelStep {
                column,
                delta: PAGE_STEP,
            }),
            _ => false,
        }
    }

    fn move_focus(&mut self, delta: isize) -> bool {
        let columns = self.columns();
        if columns == 0 {
            return false;
        }
        self.focus = (self.focus as isize + delta).rem_euclid(columns as isize) as usize;
        true
    }

    fn columns(&self) -> usize {
        self.store
            .state()
            .surface
            .as_ref()
            .map(|surface| surface.wheels().columns())
            .unwrap_or(0)
    }

    fn handle_mouse(&mut self, event: &MouseEvent, now: Instant) -> bool {
        let pos = Pos::new(event.column, event.row);
        let item_height = self.store.config().item_height;
        match event.kind {
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let Some(column) = self.hit_column(pos) else {
                    return false;
                };
                let delta = if event.kind == MouseEventKind::ScrollDown {
                    item_height
                } else {
                    -item_height
                };
                self.focus = column;
                match self.scrolls.iter_mut().find(|s| s.column == column) {
                    Some(scroll) => scroll.last = now,
                    None => self.scrolls.push(WheelScroll { column, last: now }),
                }
                self.dispatch(Action::WheelDrag { column, delta })
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(hit) = self.hit_test(pos) else {
                    return false;
                };
                match hit {
                    PickerHit::Backdrop => self.dispatch(Action::BackdropPress),
                    PickerHit::Cancel => self.dispatch(Action::Cancel),
                    PickerHit::Confirm => self.dispatch(Action::Confirm),
                    PickerHit::Item { column, .. } | PickerHit::Column { column } => {
                        self.focus = column;
                        self.press = Some(Press {
                            column,
                            last_row: pos.y,
                            moved_at: now,
                            dragged: false,
                            hit,
                        });
                        true
                    }
                    PickerHit::Sheet => false,
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(press) = self.press.as_mut() else {
                    return false;
                };
                let rows = press.last_row as i32 - pos.y as i32;
                if rows == 0 {
                    return false;
                }
                press.last_row = pos.y;
                press.moved_at = now;
                press.dragged = true;
                let column = press.column;
                self.dispatch(Action::WheelDrag {
                    column,
                    delta: rows as f32 * item_height,
                })
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(press) = self.press.take() else {
                    return false;
                };
                if press.dragged {
                    let column = press.column;
                    let idle = self.store.config().release_idle;
                    // Holding still before lifting stops the fling.
                    if now.saturating_duration_since(press.moved_at) >= idle {
                        self.dispatch(Action::WheelDrag { column, delta: 0.0 });
                    }
                    return self.dispatch(Action::WheelRelease { column });
                }
                match press.hit {
                    PickerHit::Item { column, index } => {
                        self.dispatch(Action::WheelTap { column, index })
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }

    fn hit_test(&self, pos: Pos) -> Option<PickerHit> {
        self.view
            .hit_test(self.store.state(), self.store.config(), pos)
    }

    fn hit_column(&self, pos: Pos) -> Option<usize> {
        match self.hit_test(pos)? {
            PickerHit::Item { column, .. } | PickerHit::Column { column } => Some(column),
            _ => None,
        }
    }

    fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        self.apply(result)
    }

    fn apply(&mut self, result: DispatchResult) -> bool {
        let mut changed = result.state_changed;
        for effect in result.effects {
            match effect {
                Effect::Confirm(value) => {
                    self.value = value;
                    changed |= self.store.dispatch(Action::SetValue(value)).state_changed;
                }
                Effect::Cancel => {
                    tracing::debug!(value = %self.value, "selection kept");
                }
            }
        }
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/host.rs"]
mod tests;
