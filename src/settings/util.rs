use std::env;
use std::path::{Path, PathBuf};

/// Anchor a relative path at the current working directory.
pub(super) fn absolutize(path: PathBuf) -> PathBuf {
	if path.is_absolute() {
		return path;
	}
	match env::current_dir() {
		Ok(dir) => dir.join(path),
		Err(_) => path,
	}
}

/// Shorten `path` to a `~`-relative form when it lives under `$HOME`.
pub(super) fn display_path(path: &Path) -> String {
	if let Some(home_os) = env::var_os("HOME") {
		let home = PathBuf::from(home_os);
		if let Ok(rel) = path.strip_prefix(&home) {
			if rel.components().next().is_none() {
				return "~".to_string();
			}
			let sep = std::path::MAIN_SEPARATOR;
			return format!("~{}{}", sep, rel.display());
		}
	}
	path.display().to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn relative_paths_are_anchored() {
		let resolved = absolutize(PathBuf::from("users.json"));
		assert!(resolved.is_absolute());
		assert!(resolved.ends_with("users.json"));

		let absolute = PathBuf::from("/tmp/users.json");
		assert_eq!(absolutize(absolute.clone()), absolute);
	}

	#[test]
	fn paths_outside_home_are_shown_verbatim() {
		let path = Path::new("/definitely/not/home/users.json");
		assert_eq!(display_path(path), "/definitely/not/home/users.json");
	}
}
