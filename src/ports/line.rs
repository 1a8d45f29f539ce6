//! Bidirectional line port - a pin that can be sensed or driven

/// Direction of a bidirectional line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineMode {
    /// Released, high impedance (open drain off)
    Input,
    /// Output driver enabled
    DrivenOutput,
}

/// Raw access to a pin whose direction changes at runtime.
///
/// Implementations do not track the mode; `AlarmLine` does.
pub trait BidirectionalPin {
    fn set_mode(&mut self, mode: LineMode);

    /// Set the output latch. Only meaningful while driven.
    fn drive(&mut self, high: bool);
}
