use crate::controllers::interactive::ViewerCommand;
use crate::core::fractals::fractal_kinds::FractalKind;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputAction {
    Viewer(ViewerCommand),
    ToggleOverlay,
}

#[must_use]
pub fn key_action(key_code: KeyCode) -> Option<InputAction> {
    let command = match key_code {
        KeyCode::Digit1 | KeyCode::Numpad1 => ViewerCommand::SelectFractal(FractalKind::Mandelbrot),
        KeyCode::Digit2 | KeyCode::Numpad2 => {
            ViewerCommand::SelectFractal(FractalKind::BurningShip)
        }
        KeyCode::Digit3 | KeyCode::Numpad3 => ViewerCommand::SelectFractal(FractalKind::Tricorn),
        KeyCode::Escape => ViewerCommand::Quit,
        KeyCode::KeyH => return Some(InputAction::ToggleOverlay),
        _ => return None,
    };

    Some(InputAction::Viewer(command))
}

/// Zoom for a mouse press at `cursor`; nothing until the cursor has been
/// seen inside the window.
#[must_use]
pub fn mouse_action(button: MouseButton, cursor: Option<(u32, u32)>) -> Option<InputAction> {
    let (x, y) = cursor?;

    let command = match button {
        MouseButton::Left => ViewerCommand::ZoomIn { x, y },
        MouseButton::Right => ViewerCommand::ZoomOut { x, y },
        _ => return None,
    };

    Some(InputAction::Viewer(command))
}

/// Frame pixel from a surface-to-frame mapping, which reports positions
/// outside the frame as `Err`.
#[must_use]
pub fn frame_pixel(mapped: Result<(usize, usize), (isize, isize)>) -> Option<(u32, u32)> {
    let (x, y) = mapped.ok()?;

    Some((u32::try_from(x).ok()?, u32::try_from(y).ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys_select_fractals() {
        assert_eq!(
            key_action(KeyCode::Digit1),
            Some(InputAction::Viewer(ViewerCommand::SelectFractal(
                FractalKind::Mandelbrot
            )))
        );
        assert_eq!(
            key_action(KeyCode::Digit2),
            Some(InputAction::Viewer(ViewerCommand::SelectFractal(
                FractalKind::BurningShip
            )))
        );
        assert_eq!(
            key_action(KeyCode::Numpad3),
            Some(InputAction::Viewer(ViewerCommand::SelectFractal(
                FractalKind::Tricorn
            )))
        );
    }

    #[test]
    fn test_escape_quits_and_h_toggles_overlay() {
        assert_eq!(
            key_action(KeyCode::Escape),
            Some(InputAction::Viewer(ViewerCommand::Quit))
        );
        assert_eq!(key_action(KeyCode::KeyH), Some(InputAction::ToggleOverlay));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        assert_eq!(key_action(KeyCode::KeyQ), None);
        assert_eq!(key_action(KeyCode::Digit4), None);
    }

    #[test]
    fn test_mouse_buttons_zoom_at_cursor() {
        assert_eq!(
            mouse_action(MouseButton::Left, Some((10, 20))),
            Some(InputAction::Viewer(ViewerCommand::ZoomIn { x: 10, y: 20 }))
        );
        assert_eq!(
            mouse_action(MouseButton::Right, Some((10, 20))),
            Some(InputAction::Viewer(ViewerCommand::ZoomOut { x: 10, y: 20 }))
        );
        assert_eq!(mouse_action(MouseButton::Middle, Some((10, 20))), None);
    }

    #[test]
    fn test_mouse_without_cursor_is_ignored() {
        assert_eq!(mouse_action(MouseButton::Left, None), None);
    }

    #[test]
    fn test_frame_pixel_inside_frame() {
        assert_eq!(frame_pixel(Ok((0, 0))), Some((0, 0)));
        assert_eq!(frame_pixel(Ok((399, 12))), Some((399, 12)));
    }

    #[test]
    fn test_frame_pixel_outside_frame() {
        assert_eq!(frame_pixel(Err((-1, 5))), None);
        assert_eq!(frame_pixel(Err((5, 800))), None);
    }
}
