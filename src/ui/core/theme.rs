use super::style::{Color, Mod, Style};

/// Colours of the picker sheet.
#[derive(Debug, Clone)]
pub struct Theme {
    pub sheet_bg: Color,
    pub sheet_border: Color,
    pub title_fg: Color,
    pub cancel_fg: Color,
    pub confirm_fg: Color,
    pub item_fg: Color,
    pub selected_fg: Color,
    pub band_bg: Color,
    pub focus_fg: Color,
    pub separator_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            sheet_bg: Color::Reset,
            sheet_border: Color::Indexed(8),
            title_fg: Color::Indexed(15),
            cancel_fg: Color::Indexed(8),
            confirm_fg: Color::Indexed(12),
            item_fg: Color::Indexed(7),
            selected_fg: Color::Indexed(12),
            band_bg: Color::Indexed(236),
            focus_fg: Color::Indexed(14),
            separator_fg: Color::Indexed(12),
        }
    }
}

impl Theme {
    /// Backdrop shade for an opacity in `0.0..=1.0`; `None` while it is still invisible.
    pub fn backdrop(&self, opacity: f32) -> Option<Style> {
        if opacity.is_nan() || opacity < 0.05 {
            return None;
        }
        let opacity = opacity.min(1.0);
        Some(
            Style::default()
                .bg(Color::grey((1.0 - opacity) * 0.15))
                .add_mod(Mod::DIM),
        )
    }

    pub fn item(&self, highlighted: bool) -> Style {
        if highlighted {
            Style::default().fg(self.selected_fg).add_mod(Mod::BOLD)
        } else {
            Style::default().fg(self.item_fg)
        }
    }
}
