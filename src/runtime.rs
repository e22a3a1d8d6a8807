//! Fixed payloads embedded in every build
//!
//! [`LOADER_RUNTIME`] is emitted between vendor scripts and app modules. It keeps
//! its registry and cache inside a closure, so every evaluated bundle owns its own
//! module table, and installs `require` and `require.register` on the global
//! object. [`INDEX_HTML`] is the entry document that loads both bundles and
//! boots the `main` module.

/// Module loader runtime
///
/// - `require.register(name, factory)` stores `factory` under `name`; a later
///   registration of the same name replaces it.
/// - `require(name)` treats `name` as absolute, runs the factory once with
///   `(exports, localRequire, module)` and returns the cached `module.exports`
///   on every later call.
/// - `localRequire` resolves `.`/`..` names against the requesting module's
///   directory before delegating to `require`.
/// - Requiring an unregistered name throws `module "<name>" not found`.
pub const LOADER_RUNTIME: &str = r#"(function(root) {
var registered = Object.create(null),
	cache = Object.create(null);

var isRelative = function(name) {
	return /^\.\.?(\/|$)/.test(name);
};

var dirname = function(path) {
	return path.split('/').slice(0, -1).join('/');
};

var expand = function(dir, name) {
	var results = [], parts, part;
	if (!isRelative(name)) {
		return name;
	}
	parts = [dir, name].join('/').split('/');
	for (var i = 0, length = parts.length; i < length; i++) {
		part = parts[i];
		if (part === '..') {
			results.pop();
		} else if (part !== '.' && part !== '') {
			results.push(part);
		}
	}
	return results.join('/');
};

var localRequire = function(path) {
	return function(name) {
		return require(expand(dirname(path), name));
	};
};

var require = function(name) {
	if (Object.prototype.hasOwnProperty.call(cache, name)) {
		return cache[name].exports;
	}
	if (!Object.prototype.hasOwnProperty.call(registered, name)) {
		throw new Error('module "' + name + '" not found');
	}
	var m = { id: name, exports: {} };
	cache[name] = m;
	try {
		registered[name].call(m.exports, m.exports, localRequire(name), m);
	} catch (e) {
		delete cache[name];
		throw e;
	}
	return m.exports;
};

require.register = function(name, definition) {
	registered[name] = definition;
};

root.global = root;
root.require = require;

})(typeof window !== 'undefined' ? window : globalThis);
"#;

/// Entry document written by `build` and served at `/`
pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta http-equiv="X-UA-Compatible" content="IE=edge,chrome=1">
    <meta name="viewport" content="width=device-width,initial-scale=1">
    <title></title>
    <link rel="stylesheet" href="index.css" >
  </head>
  <body>
    <script src="index.js"></script>
    <script>require("main")</script>
  </body>
</html>"#;
