use std::{
    ffi::OsString,
    io,
    path::{Path, PathBuf},
};

use log::error;

use crate::universal_codes::Method;

/// `path` with `.ext` added to the end (photo.bmp -> photo.bmp.eoc).
pub fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

/// Where the dictionary for the stream at `stream` lives.
pub fn dictionary_path(stream: &Path, method: Method) -> PathBuf {
    stream.with_extension(method.dictionary_extension())
}

/// Default name for the data restored from `stream`: the stream extension is removed if
/// present, otherwise `.out` is added.
pub fn restored_path(stream: &Path, method: Method) -> PathBuf {
    match stream.extension() {
        Some(ext) if ext == method.stream_extension() => stream.with_extension(""),
        _ => append_extension(stream, "out"),
    }
}

/// Method implied by the extension of a compressed file.
pub fn method_from_path(stream: &Path) -> Option<Method> {
    stream
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(Method::from_extension)
}

/// Refuse to replace an existing file unless forced.
pub fn check_overwrite(path: &Path, force: bool) -> io::Result<()> {
    if !force && path.exists() {
        error!(
            "Output file {} already exists. Use -f to overwrite it.",
            path.display()
        );
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", path.display()),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{append_extension, dictionary_path, method_from_path, restored_path};
    use crate::universal_codes::Method;
    use std::path::{Path, PathBuf};

    #[test]
    fn append_test() {
        assert_eq!(
            append_extension(Path::new("img/photo.bmp"), "eoc"),
            PathBuf::from("img/photo.bmp.eoc")
        );
    }

    #[test]
    fn dictionary_test() {
        assert_eq!(
            dictionary_path(Path::new("photo.bmp.eoc"), Method::EliasOmega),
            PathBuf::from("photo.bmp.eod")
        );
        assert_eq!(
            dictionary_path(Path::new("photo.bmp.lc"), Method::Levenshtein),
            PathBuf::from("photo.bmp.ld")
        );
    }

    #[test]
    fn restored_test() {
        assert_eq!(
            restored_path(Path::new("photo.bmp.lc"), Method::Levenshtein),
            PathBuf::from("photo.bmp")
        );
        assert_eq!(
            restored_path(Path::new("photo.bin"), Method::Levenshtein),
            PathBuf::from("photo.bin.out")
        );
    }

    #[test]
    fn method_from_path_test() {
        assert_eq!(
            method_from_path(Path::new("a/photo.bmp.eoc")),
            Some(Method::EliasOmega)
        );
        assert_eq!(method_from_path(Path::new("photo.lc")), Some(Method::Levenshtein));
        assert_eq!(method_from_path(Path::new("photo.bmp")), None);
        assert_eq!(method_from_path(Path::new("photo")), None);
    }
}
