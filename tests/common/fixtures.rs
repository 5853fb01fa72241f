//! Test fixture helpers for creating test apps
//!
//! Provides a small "has-banner" app: default and alternate package files, default
//! and alternate banner templates, and a standalone (UMD-wrapped) bundle as a
//! browserify-style bundler would emit it.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// UMD wrapper head for a standalone bundle exposing `Fizz.Buzz`
pub const UMD_PRELUDE: &str = "(function(f){if(typeof exports===\"object\"&&typeof module!==\"undefined\"){module.exports=f()}else if(typeof define===\"function\"&&define.amd){define([],f)}else{var g;if(typeof window!==\"undefined\"){g=window}else if(typeof global!==\"undefined\"){g=global}else{g=this}(g.Fizz || (g.Fizz = {})).Buzz = f()}})(function(){var define,module,exports;return ";

/// Bundler module loader
pub const PRELUDE: &str = "(function(){function r(e,n,t){function o(i,f){if(!n[i]){if(!e[i]){var c=\"function\"==typeof require&&require;if(!f&&c)return c(i,!0);var a=new Error(\"Cannot find module '\"+i+\"'\");throw a.code=\"MODULE_NOT_FOUND\",a}var p=n[i]={exports:{}};e[i][0].call(p.exports,function(r){var n=e[i][1][r];return o(n||r)},p,p.exports,r,e,n,t)}return n[i].exports}for(var i=0;i<t.length;i++)o(t[i]);return o}return r})()";

/// Module table
pub const MODULES: &str = "({1:[function(require,module,exports){\n\"use strict\";\n\nmodule.exports = function fizzBuzz (n) {\n  return n % 15 === 0 ? \"FizzBuzz\" : n % 5 === 0 ? \"Buzz\" : n % 3 === 0 ? \"Fizz\" : n;\n};\n\n},{}]},{},[1])";

/// Entry module invocation
pub const POSTLUDE: &str = "(1)";

/// UMD wrapper tail
pub const UMD_POSTLUDE: &str = "\n});\n";

/// Inline source map annotation
pub const SOURCE_MAP: &str =
    "//# sourceMappingURL=data:application/json;charset=utf-8;base64,eyJ2ZXJzaW9uIjozLCJzb3VyY2VzIjpbXX0=\n";

/// Unique marker for each bundle part, in the order they must appear
pub const BUNDLE_PARTS: [(&str, &str); 6] = [
    ("umd prelude", "(function(f){if(typeof exports"),
    ("prelude", "(function(){function r(e,n,t)"),
    ("modules", "function fizzBuzz (n)"),
    ("postlude", "},{}]},{},[1])(1)"),
    ("umd postlude", "(1)\n});"),
    ("source map", "//# sourceMappingURL="),
];

/// Default package metadata
pub const PACKAGE_JSON: &str = r#"{
  "name": "fizz-buzz",
  "version": "1.0.0",
  "description": "FizzBuzz as a service",
  "author": {
    "name": "John Doe",
    "email": "john@example.com"
  },
  "license": "MIT",
  "keywords": ["fizz", "buzz"]
}
"#;

/// Alternate package metadata
pub const ALT_PACKAGE_JSON: &str = r#"{
  "name": "Alternate World",
  "version": "9.87.654",
  "author": "Jane Roe"
}
"#;

/// Default banner template
pub const BANNER_TXT: &str = "<%= pkg.name %> v<%= pkg.version %>\n\n<%= pkg.description %>\n\nCopyright (c) <%= pkg.author.name %>. <%= pkg.license %> license.\n";

/// Alternate banner template
pub const ALT_BANNER_TXT: &str = "ALTERNATE BANNER\n<%= pkg.name %> v<%= pkg.version %>\n";

/// A standalone bundle without any banner
pub fn standalone_bundle() -> String {
    [UMD_PRELUDE, PRELUDE, MODULES, POSTLUDE, UMD_POSTLUDE, SOURCE_MAP].concat()
}

/// Paths into a fixture app; the TempDir must be kept alive
pub struct TestApp {
    /// Owns the directory
    pub dir: TempDir,
    /// Project root
    pub root: PathBuf,
    /// `dist/bundle.js`
    pub bundle: PathBuf,
}

impl TestApp {
    /// Path relative to the project root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Current bundle contents
    pub fn read_bundle(&self) -> String {
        fs::read_to_string(&self.bundle).expect("Failed to read bundle")
    }
}

/// Creates the "has-banner" app with both default and alternate sources
pub fn create_has_banner_app() -> anyhow::Result<TestApp> {
    let app = create_app_without_banner()?;
    fs::write(app.path("banner.txt"), BANNER_TXT)?;
    fs::write(app.path("alt-banner.txt"), ALT_BANNER_TXT)?;
    Ok(app)
}

/// Creates an app with package files and a bundle, but no banner templates
pub fn create_app_without_banner() -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let root = dir.path().to_path_buf();

    fs::write(root.join("package.json"), PACKAGE_JSON)?;
    fs::write(root.join("alt-package.json"), ALT_PACKAGE_JSON)?;

    let dist = root.join("dist");
    fs::create_dir(&dist)?;
    let bundle = dist.join("bundle.js");
    fs::write(&bundle, standalone_bundle())?;

    Ok(TestApp { dir, root, bundle })
}
