// ABOUTME: Four-sided spacing surrounding a panel's content area.
// ABOUTME: MarginSpec describes partial edits, with `every` applied before per-side values.

use serde::{Deserialize, Serialize};

use crate::error::{check_length, LayoutError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Margin {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Result<Self, LayoutError> {
        Ok(Self {
            left: check_length("left", left)?,
            right: check_length("right", right)?,
            top: check_length("top", top)?,
            bottom: check_length("bottom", bottom)?,
        })
    }

    pub fn uniform(value: f64) -> Result<Self, LayoutError> {
        Self::new(value, value, value, value)
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn set_left(&mut self, left: f64) -> Result<(), LayoutError> {
        self.left = check_length("left", left)?;
        Ok(())
    }

    pub fn set_right(&mut self, right: f64) -> Result<(), LayoutError> {
        self.right = check_length("right", right)?;
        Ok(())
    }

    pub fn set_top(&mut self, top: f64) -> Result<(), LayoutError> {
        self.top = check_length("top", top)?;
        Ok(())
    }

    pub fn set_bottom(&mut self, bottom: f64) -> Result<(), LayoutError> {
        self.bottom = check_length("bottom", bottom)?;
        Ok(())
    }

    /// Set all four sides to the same value
    pub fn set_every(&mut self, value: f64) -> Result<(), LayoutError> {
        *self = Self::uniform(value)?;
        Ok(())
    }

    /// Horizontal spacing: left + right
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Vertical spacing: top + bottom
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Apply a partial edit. Nothing is written unless every given value is valid.
    pub fn apply(&mut self, spec: &MarginSpec) -> Result<(), LayoutError> {
        spec.validate()?;

        let mut next = *self;
        if let Some(every) = spec.every {
            next = Self::uniform(every)?;
        }
        if let Some(left) = spec.left {
            next.left = left;
        }
        if let Some(right) = spec.right {
            next.right = right;
        }
        if let Some(top) = spec.top {
            next.top = top;
        }
        if let Some(bottom) = spec.bottom {
            next.bottom = bottom;
        }
        *self = next;
        Ok(())
    }
}

/// A partial margin edit
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginSpec {
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub top: Option<f64>,
    pub bottom: Option<f64>,
    /// Uniform value written before the per-side overrides
    pub every: Option<f64>,
}

impl MarginSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn every(value: f64) -> Self {
        Self {
            every: Some(value),
            ..Self::default()
        }
    }

    pub fn left(mut self, value: f64) -> Self {
        self.left = Some(value);
        self
    }

    pub fn right(mut self, value: f64) -> Self {
        self.right = Some(value);
        self
    }

    pub fn top(mut self, value: f64) -> Self {
        self.top = Some(value);
        self
    }

    pub fn bottom(mut self, value: f64) -> Self {
        self.bottom = Some(value);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let sides = [
            ("every", self.every),
            ("left", self.left),
            ("right", self.right),
            ("top", self.top),
            ("bottom", self.bottom),
        ];
        for (field, value) in sides {
            if let Some(value) = value {
                check_length(field, value)?;
            }
        }
        Ok(())
    }
}
