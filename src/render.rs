//! HTML rendering with templates compiled into the binary.

use crate::error::AppError;
use crate::model::User;
use tera::{Context, Tera};

const INDEX: &str = "index.html";

pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Parse the embedded templates. `.html` names get tera's autoescaping.
    pub fn new() -> Result<Self, tera::Error> {
        Self::with_index(include_str!("../templates/index.html"))
    }

    pub(crate) fn with_index(source: &str) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX, source)?;
        Ok(Self { tera })
    }

    pub fn index(&self, users: &[User], error: Option<&str>) -> Result<String, AppError> {
        let mut ctx = Context::new();
        ctx.insert("users", users);
        ctx.insert("error", &error);
        Ok(self.tera.render(INDEX, &ctx)?)
    }
}
