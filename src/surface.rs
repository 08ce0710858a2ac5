// Drawing surface abstraction and its pixel bounds. Anything that can clear,
// fill a circle and stroke a line can host the particle field.

use std::convert::Infallible;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Bounds { width, height }
    }

    // Negative dimensions count as empty
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }
}

pub trait Surface {
    type Error;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), Self::Error>;

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: &str) -> Result<(), Self::Error>;

    fn stroke_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        stroke: &str,
        width: f64,
    ) -> Result<(), Self::Error>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        fill: String,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        stroke: String,
        width: f64,
    },
}

// In-memory surface that keeps every command issued to it
#[derive(Default, Debug)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Recorder::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }
}

impl Surface for Recorder {
    type Error = Infallible;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Clear { x, y, width, height });
        Ok(())
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: &str) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            fill: fill.to_owned(),
        });
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        stroke: &str,
        width: f64,
    ) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: stroke.to_owned(),
            width,
        });
        Ok(())
    }
}
