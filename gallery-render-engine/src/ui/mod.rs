/// Help/credits overlays and the pointer-lock button.
pub mod overlays;
