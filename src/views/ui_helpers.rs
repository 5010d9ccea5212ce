use eframe::egui;

/// True when a pointer press landed this frame outside every rect in `avoid`.
/// Press-based (not click-based) so dismissal fires on pointer-down.
pub fn pressed_outside(ui: &egui::Ui, avoid: &[egui::Rect]) -> bool {
    ui.input(|i| i.pointer.any_pressed() && press_is_outside(i.pointer.interact_pos(), avoid))
}

/// Geometry half of `pressed_outside`. A press with no known position counts
/// as inside, so synthetic events never dismiss anything.
pub fn press_is_outside(pos: Option<egui::Pos2>, avoid: &[egui::Rect]) -> bool {
    pos.map_or(false, |p| !avoid.iter().any(|r| r.contains(p)))
}

#[cfg(test)]
mod tests {
    use super::press_is_outside;
    use eframe::egui::{pos2, Rect};

    fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect {
        Rect::from_min_max(pos2(x0, y0), pos2(x1, y1))
    }

    #[test]
    fn no_position_is_never_outside() {
        assert!(!press_is_outside(None, &[rect(0.0, 0.0, 10.0, 10.0)]));
    }

    #[test]
    fn press_inside_any_rect_is_inside() {
        let rects = [rect(0.0, 0.0, 10.0, 10.0), rect(20.0, 0.0, 30.0, 10.0)];
        assert!(!press_is_outside(Some(pos2(5.0, 5.0)), &rects));
        assert!(!press_is_outside(Some(pos2(25.0, 5.0)), &rects));
    }

    #[test]
    fn press_outside_all_rects_is_outside() {
        let rects = [rect(0.0, 0.0, 10.0, 10.0), rect(20.0, 0.0, 30.0, 10.0)];
        assert!(press_is_outside(Some(pos2(15.0, 5.0)), &rects));
        assert!(press_is_outside(Some(pos2(5.0, 50.0)), &rects));
    }

    #[test]
    fn empty_avoid_list_means_everything_is_outside() {
        assert!(press_is_outside(Some(pos2(0.0, 0.0)), &[]));
    }
}
