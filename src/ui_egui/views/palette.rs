use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

const ACCENT: Color32 = Color32::from_rgb(100, 150, 255);

#[derive(Clone, Copy)]
pub(crate) struct GridPalette {
    pub header_bg: Color32,
    pub header_text: Color32,
    pub group_bg: Color32,
    pub group_text: Color32,
    pub cell_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub drop_target: Color32,
    pub hover_overlay: Color32,
    pub resizing_outline: Color32,
}

impl GridPalette {
    pub fn from_visuals(visuals: &egui::Visuals) -> Self {
        let dark = visuals.dark_mode;
        let base = visuals.extreme_bg_color;
        let panel = visuals.panel_fill;
        let text = visuals.text_color();

        Self {
            header_bg: blend(panel, base, 0.5),
            header_text: text,
            group_bg: blend(panel, ACCENT, if dark { 0.15 } else { 0.08 }),
            group_text: text,
            cell_bg: base,
            weekend_bg: blend(base, panel, 0.6),
            today_bg: blend(base, ACCENT, if dark { 0.18 } else { 0.10 }),
            border: visuals.widgets.noninteractive.bg_stroke.color,
            today_border: ACCENT,
            drop_target: with_alpha(ACCENT, if dark { 90 } else { 60 }),
            hover_overlay: with_alpha(ACCENT, if dark { 40 } else { 25 }),
            resizing_outline: if dark { Color32::WHITE } else { Color32::from_rgb(30, 30, 30) },
        }
    }
}
