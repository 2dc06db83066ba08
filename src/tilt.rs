//! Pointer-driven 3D tilt for card elements.
//!
//! Angles are proportional to the cursor's offset from the card center:
//! vertical offset drives `rotateX`, negated horizontal offset drives
//! `rotateY`, both divided by a damping constant.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

/// A card's bounding box in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Rotation angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

/// Tilt for a cursor at client position (`client_x`, `client_y`).
#[must_use]
pub fn tilt_for_pointer(rect: CardRect, client_x: f64, client_y: f64, damping: f64) -> Tilt {
    let x = client_x - rect.left;
    let y = client_y - rect.top;
    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;
    Tilt {
        rotate_x: (y - center_y) / damping,
        rotate_y: (center_x - x) / damping,
    }
}

/// Inline transform for a tilted, slightly lifted card.
#[must_use]
pub fn tilt_transform(tilt: Tilt, perspective_px: f64, lift_px: f64) -> String {
    format!(
        "perspective({perspective_px}px) rotateX({}deg) rotateY({}deg) translateY(-{lift_px}px)",
        tilt.rotate_x, tilt.rotate_y
    )
}
