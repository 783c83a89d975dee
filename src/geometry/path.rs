/// One drawing operation in a bubble outline.
///
/// `LineBy` is relative to the current point; everything else is absolute.
/// The sequence mirrors how a canvas path is driven: one `MoveTo`, a run of
/// segments, and a final `Close` connecting back to the start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(f32, f32),
    LineTo(f32, f32),
    LineBy(f32, f32),
    Close,
}

/// An ordered, closed outline traced by [`PathCommand`]s.
///
/// Rebuilt from scratch on every size or config change; never mutated
/// incrementally after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BubblePath {
    commands: Vec<PathCommand>,
}

impl BubblePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(x, y));
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo(x, y));
    }

    pub fn line_by(&mut self, dx: f32, dy: f32) {
        self.commands.push(PathCommand::LineBy(dx, dy));
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Absolute vertices with relative segments resolved, in trace order.
    /// `Close` contributes no vertex.
    pub fn vertices(&self) -> Vec<(f32, f32)> {
        let mut points = Vec::with_capacity(self.commands.len());
        let mut cursor = (0.0f32, 0.0f32);
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(x, y) | PathCommand::LineTo(x, y) => {
                    cursor = (x, y);
                    points.push(cursor);
                }
                PathCommand::LineBy(dx, dy) => {
                    cursor = (cursor.0 + dx, cursor.1 + dy);
                    points.push(cursor);
                }
                PathCommand::Close => {}
            }
        }
        points
    }

    /// A path is closed when it ends in `Close`. `Close` joins the current
    /// point back to the start of the outline, so no explicit return
    /// segment is required.
    pub fn is_closed(&self) -> bool {
        !self.vertices().is_empty() && matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// SVG path data (`d` attribute) for the outline.
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for command in &self.commands {
            if !d.is_empty() {
                d.push(' ');
            }
            match *command {
                PathCommand::MoveTo(x, y) => d.push_str(&format!("M {x:.2} {y:.2}")),
                PathCommand::LineTo(x, y) => d.push_str(&format!("L {x:.2} {y:.2}")),
                PathCommand::LineBy(dx, dy) => d.push_str(&format!("l {dx:.2} {dy:.2}")),
                PathCommand::Close => d.push('Z'),
            }
        }
        d
    }
}
