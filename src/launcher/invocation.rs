//! Login detection and argument-0 rewriting.
use std::{
    ffi::{OsStr, OsString},
    os::unix::ffi::OsStrExt,
};

/// How the launcher was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationKind {
    Login,
    NonLogin,
}

impl InvocationKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            InvocationKind::Login => "login",
            InvocationKind::NonLogin => "non_login",
        }
    }
}

/// Original argument vector plus the login decision made from argument 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    kind: InvocationKind,
    args: Vec<OsString>,
}

impl Invocation {
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let args: Vec<OsString> = args.into_iter().collect();
        let kind = match args.first() {
            Some(arg0) if is_login_name(arg0) => InvocationKind::Login,
            _ => InvocationKind::NonLogin,
        };
        Self { kind, args }
    }

    pub fn kind(&self) -> InvocationKind {
        self.kind
    }

    pub fn is_login(&self) -> bool {
        self.kind == InvocationKind::Login
    }

    /// Argument vector for the replacement image: `arg0` followed by every
    /// original argument after position 0, unchanged.
    pub fn into_argv(self, arg0: impl Into<OsString>) -> Vec<OsString> {
        let mut args = self.args;
        match args.first_mut() {
            Some(first) => *first = arg0.into(),
            None => args.push(arg0.into()),
        }
        args
    }
}

/// A leading `-` in argument 0 marks a login shell.
pub fn is_login_name(arg0: &OsStr) -> bool {
    arg0.as_bytes().first() == Some(&b'-')
}
