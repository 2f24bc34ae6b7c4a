//! Hands frames to whatever draws them: one compact JSON object per line.

use std::io::{self, Write};

use crate::types::RenderableFrame;

pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn emit(&mut self, frame: &RenderableFrame) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")?;
        // renderers tail the stream live
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
