// PDF canvas backend. The layout engine only sees the `Canvas` trait; this
// module is the one place that touches the lopdf object model.

mod canvas;

pub use canvas::PdfCanvas;
