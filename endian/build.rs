//! Resolves the host byte order mode and passes it to the crate as the
//! `endian_mode` cfg.
//!
//! A mode can be requested with one of the `force-little`, `force-big` and
//! `runtime-detect` features, or with the `ENDIAN_MODE` environment variable.
//! Without a request the byte order of the compilation target is used.

use std::{
    env,
    fmt::Display,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Little,
    Big,
    Runtime,
}

impl Mode {
    fn cfg_value(&self) -> &'static str {
        match self {
            Self::Little => "little",
            Self::Big => "big",
            Self::Runtime => "runtime",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.cfg_value())
    }
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("conflicting byte order modes requested: {first} and {second}")]
    Conflict { first: Mode, second: Mode },

    #[error("unrecognized ENDIAN_MODE: {0:?} (expected one of: little, big, runtime, auto)")]
    UnknownMode(String),

    #[error("can't determine the byte order of the target (target_endian = {0:?}). Enable one of the `force-little`, `force-big` or `runtime-detect` features")]
    UnknownTarget(Option<String>),
}

fn requested_modes() -> Result<Vec<Mode>, Error> {
    let mut modes = vec![];

    for (feature, mode) in [
        ("CARGO_FEATURE_FORCE_LITTLE", Mode::Little),
        ("CARGO_FEATURE_FORCE_BIG", Mode::Big),
        ("CARGO_FEATURE_RUNTIME_DETECT", Mode::Runtime),
    ] {
        if env::var_os(feature).is_some() {
            modes.push(mode);
        }
    }

    if let Ok(value) = env::var("ENDIAN_MODE") {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => {}
            "little" => modes.push(Mode::Little),
            "big" => modes.push(Mode::Big),
            "runtime" => modes.push(Mode::Runtime),
            _ => return Err(Error::UnknownMode(value)),
        }
    }

    Ok(modes)
}

fn target_mode() -> Result<Mode, Error> {
    let target_endian = env::var("CARGO_CFG_TARGET_ENDIAN").ok();
    match target_endian.as_deref() {
        Some("little") => Ok(Mode::Little),
        Some("big") => Ok(Mode::Big),
        _ => Err(Error::UnknownTarget(target_endian)),
    }
}

fn resolve_mode() -> Result<Mode, Error> {
    let mut requested = requested_modes()?.into_iter();

    let Some(first) = requested.next()
    else {
        return target_mode();
    };

    if let Some(second) = requested.find(|mode| *mode != first) {
        return Err(Error::Conflict { first, second });
    }

    if first != Mode::Runtime {
        match target_mode() {
            Ok(target) if target != first => {
                println!(
                    "cargo::warning=host byte order forced to {first}, but the target is {target} endian"
                );
            }
            _ => {}
        }
    }

    Ok(first)
}

fn main() {
    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rerun-if-env-changed=ENDIAN_MODE");
    println!(r#"cargo::rustc-check-cfg=cfg(endian_mode, values("little", "big", "runtime"))"#);

    let mode = resolve_mode().unwrap_or_else(|e| panic!("{e}"));

    println!(r#"cargo::rustc-cfg=endian_mode="{}""#, mode.cfg_value());
}
