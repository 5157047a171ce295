mod writer;
mod xml;

pub use writer::SqqWriter;
pub use xml::render_round;
