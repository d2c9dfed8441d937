//! DDL statement rendering.
//!
//! Statements are assembled from placeholder templates (`"ALTER TABLE ? ADD
//! ? ?"`) and structured arguments, so that identifier quoting stays in one
//! place and the diff logic never concatenates raw SQL. Both positional (`?`)
//! and named (`@name`) placeholder styles are supported. Dialects differ only
//! in identifier quoting and type-name formatting; they never change what the
//! diff decides.

use keel_schema::{ColumnDef, IndexDef};

use crate::error::{MigrateResult, MigrationError};

/// A SQL dialect the engine can emit DDL for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    MySql,
    Sqlite,
}

impl Dialect {
    /// Parse a provider name (`"postgres"`, `"mysql"`, `"sqlite"`).
    ///
    /// Unknown engines fail here, before any live-schema query is attempted.
    pub fn parse(name: &str) -> MigrateResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            "mysql" => Ok(Dialect::MySql),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            other => Err(MigrationError::UnsupportedDialect(other.to_string())),
        }
    }

    /// Canonical provider name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::MySql => "mysql",
            Dialect::Sqlite => "sqlite",
        }
    }

    /// Quote an identifier for this dialect.
    pub fn quote(&self, ident: &str) -> String {
        match self {
            Dialect::Postgres | Dialect::Sqlite => format!("\"{}\"", ident),
            Dialect::MySql => format!("`{}`", ident),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured template argument.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlArg {
    /// A table reference, quoted per dialect.
    Table(String),
    /// A column reference, quoted per dialect.
    Column(String),
    /// Raw SQL text, substituted verbatim.
    Expr(String),
    /// A parenthesized, comma-separated list of arguments.
    List(Vec<SqlArg>),
}

impl SqlArg {
    /// A table reference.
    pub fn table(name: impl Into<String>) -> Self {
        SqlArg::Table(name.into())
    }

    /// A column reference.
    pub fn column(name: impl Into<String>) -> Self {
        SqlArg::Column(name.into())
    }

    /// A raw SQL expression.
    pub fn expr(sql: impl Into<String>) -> Self {
        SqlArg::Expr(sql.into())
    }

    /// A parenthesized list of column references.
    pub fn columns(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        SqlArg::List(names.into_iter().map(SqlArg::column).collect())
    }
}

/// Renders placeholder templates into terminated SQL statements.
#[derive(Debug, Clone, Copy)]
pub struct StatementBuilder {
    dialect: Dialect,
}

impl StatementBuilder {
    /// Create a builder for `dialect`.
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// The dialect this builder renders for.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Render a positional (`?`) template, appending the statement terminator.
    ///
    /// Placeholders beyond the argument list are left verbatim, matching the
    /// forgiving behavior of the expression renderer this mirrors.
    pub fn stmt(&self, template: &str, args: &[SqlArg]) -> String {
        let mut out = String::with_capacity(template.len() + 16);
        let mut args = args.iter();
        for ch in template.chars() {
            if ch == '?' {
                match args.next() {
                    Some(arg) => out.push_str(&self.render(arg)),
                    None => out.push(ch),
                }
            } else {
                out.push(ch);
            }
        }
        out.push_str(";\n");
        out
    }

    /// Render a named (`@name`) template, appending the statement terminator.
    ///
    /// Unknown names are left in place.
    pub fn stmt_named(&self, template: &str, args: &[(&str, SqlArg)]) -> String {
        let mut out = String::with_capacity(template.len() + 16);
        let chars: Vec<char> = template.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            if chars[i] == '@' {
                let start = i + 1;
                let mut end = start;
                while end < chars.len() && (chars[end].is_alphanumeric() || chars[end] == '_') {
                    end += 1;
                }
                let name: String = chars[start..end].iter().collect();
                match args.iter().find(|(n, _)| *n == name) {
                    Some((_, arg)) => {
                        out.push_str(&self.render(arg));
                        i = end;
                        continue;
                    }
                    None => {
                        out.push('@');
                        i += 1;
                        continue;
                    }
                }
            }
            out.push(chars[i]);
            i += 1;
        }
        out.push_str(";\n");
        out
    }

    /// Render a single argument.
    fn render(&self, arg: &SqlArg) -> String {
        match arg {
            SqlArg::Table(name) | SqlArg::Column(name) => self.dialect.quote(name),
            SqlArg::Expr(sql) => sql.clone(),
            SqlArg::List(items) => {
                let parts: Vec<String> = items.iter().map(|a| self.render(a)).collect();
                format!("({})", parts.join(","))
            }
        }
    }

    /// Render the full column definition used after a column reference:
    /// type, NOT NULL, UNIQUE, DEFAULT, and (MySQL) inline COMMENT.
    pub fn column_definition(&self, column: &ColumnDef) -> String {
        let mut def = column.db_type.clone();

        if column.not_null {
            def.push_str(" NOT NULL");
        }
        if column.unique && !column.primary_key {
            def.push_str(" UNIQUE");
        }
        if let Some(default) = &column.default {
            def.push_str(" DEFAULT ");
            def.push_str(default);
        }
        if self.dialect == Dialect::MySql {
            if let Some(comment) = &column.comment {
                def.push_str(&format!(" COMMENT '{}'", comment.replace('\'', "''")));
            }
        }

        def
    }

    /// Render an index's column list as a template argument.
    ///
    /// Per entry: an expression replaces the column reference outright;
    /// otherwise the quoted column, with optional prefix length, collation
    /// and sort direction appended.
    pub fn index_columns(&self, index: &IndexDef) -> SqlArg {
        let mut parts = Vec::with_capacity(index.columns.len());
        for col in &index.columns {
            let mut part = match &col.expression {
                Some(expr) => expr.clone(),
                None => {
                    let mut s = self.dialect.quote(col.name.as_str());
                    if let Some(length) = col.length {
                        s.push_str(&format!("({})", length));
                    }
                    s
                }
            };
            if let Some(collate) = &col.collate {
                part.push_str(" COLLATE ");
                part.push_str(collate);
            }
            if let Some(sort) = col.sort {
                part.push(' ');
                part.push_str(sort.as_sql());
            }
            parts.push(SqlArg::Expr(part));
        }
        SqlArg::List(parts)
    }
}
