//! Inkmask Core Library
//!
//! Interactive freehand mask painting for image inpainting: pointer-to-canvas
//! coordinate mapping under zoom, incremental stroke rendering, stroke-level
//! undo via raster snapshots, and binary black/white mask extraction at an
//! independent target resolution.

pub mod brush;
pub mod cursor;
pub mod engine;
pub mod history;
pub mod input;
pub mod mask;
pub mod raster;
pub mod stroke;
pub mod surface;
pub mod zoom;

pub use brush::{BrushConfig, Color};
pub use cursor::CursorState;
pub use engine::{EngineError, EngineResult, MaskEngine};
pub use history::History;
pub use input::{EventBindings, KeyEvent, Modifiers, PointerEvent};
pub use surface::Surface;
pub use zoom::{Zoom, ZOOM_STEP};
