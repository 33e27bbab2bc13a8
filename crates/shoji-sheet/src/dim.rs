/// Visibility of the overlay behind the sheet. Derived from sheet position,
/// never mutated on its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DimState {
    Max,
    Off,
    Percent(f32),
}

impl DimState {
    /// Overlay alpha in `[0, 1]` for renderers that want a plain scalar.
    pub fn alpha(&self) -> f32 {
        match self {
            DimState::Max => 1.0,
            DimState::Off => 0.0,
            DimState::Percent(p) => p.clamp(0.0, 1.0),
        }
    }
}

/// Maps the sheet's top edge to an overlay state: fully dim at or above the
/// short-form anchor, fading out with displacement below it.
pub fn dim_for_position(y: f32, short_form_y: f32, sheet_height: f32) -> DimState {
    if y <= short_form_y {
        return DimState::Max;
    }
    if sheet_height <= 0.0 {
        return DimState::Off;
    }
    let displacement = y - short_form_y;
    DimState::Percent((1.0 - displacement / sheet_height).clamp(0.0, 1.0))
}
