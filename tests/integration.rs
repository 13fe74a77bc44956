use snapmd::{
    SnapmdError, SnapshotOutcome, SnapshotRequest, create_snapshot, create_snapshot_at,
    default_output_name, resolve_output_path,
};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;
const STAMP: &str = "01.02.2025 03:04:05";
fn write(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}
#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("proj");
    let content = "export const answer: number = 42; // forty-two!!!";
    write(&root, "a.ts", content.as_bytes());
    write(&root, "b.bin", &[0, 1, 2, 3]);
    write(&root, "node_modules/x.ts", b"export {};");
    write(&root, "big.ts", "A".repeat(200 * 1024).as_bytes());
    let out_dir = dir.path().join("snapshots");
    let request = SnapshotRequest::new(&root)
        .output("proj.md")
        .output_dir(&out_dir);
    let outcome = create_snapshot_at(&request, STAMP).unwrap();
    let written = out_dir.join("proj.md");
    match outcome {
        SnapshotOutcome::Written { path, files, bytes } => {
            assert_eq!(path, written);
            assert_eq!(files, 1);
            assert_eq!(bytes, fs::metadata(&written).unwrap().len());
        }
        SnapshotOutcome::NoFiles => panic!("expected a written snapshot"),
    }
    let expected = format!(
        "# Снапшот папки proj\n\n\
         *Создано: {}*\n\n\
         ## Структура файлов\n\n\
         ```\n\
         proj/\n\
         └── a.ts\n\
         ```\n\n\
         ---\n\n\
         ## Содержимое файлов\n\n\
         ### a.ts\n\
         ```typescript\n\
         {}\n\
         ```\n\n",
        STAMP, content
    );
    assert_eq!(fs::read_to_string(&written).unwrap(), expected);
}
#[test]
fn test_nested_paths_use_forward_slashes() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("app");
    write(&root, "components/ui/Button.tsx", b"export const Button = 1;");
    write(&root, "README", b"read me");
    let out_dir = dir.path().join("snapshots");
    let request = SnapshotRequest::new(&root).output_dir(&out_dir);
    create_snapshot_at(&request, STAMP).unwrap();
    let doc = fs::read_to_string(out_dir.join("app-snapshot.md")).unwrap();
    assert!(doc.contains("### components/ui/Button.tsx\n```tsx\nexport const Button = 1;\n```\n"));
    assert!(doc.contains("### README\n```text\nread me\n```\n"));
    assert!(doc.find("### README").unwrap() < doc.find("### components/").unwrap());
    assert_eq!(doc.matches("### components/ui/Button.tsx").count(), 1);
}
#[test]
fn test_no_files_writes_nothing() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("assets");
    write(&root, "logo.png", &[137, 80, 78, 71]);
    write(&root, "node_modules/dep.js", b"module.exports = {};");
    let out_dir = dir.path().join("snapshots");
    let request = SnapshotRequest::new(&root).output_dir(&out_dir);
    let outcome = create_snapshot_at(&request, STAMP).unwrap();
    assert_eq!(outcome, SnapshotOutcome::NoFiles);
    assert!(!out_dir.join("assets-snapshot.md").exists());
}
#[test]
fn test_output_directory_components_discarded() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("src");
    write(&root, "main.js", b"console.log(1);");
    let out_dir = dir.path().join("snapshots");
    let request = SnapshotRequest::new(&root)
        .output("some/dir/out.md")
        .output_dir(&out_dir);
    create_snapshot(&request).unwrap();
    assert!(out_dir.join("out.md").is_file());
    assert!(!out_dir.join("some").exists());
}
#[test]
fn test_output_path_resolution() {
    let out = Path::new("snapshots");
    assert_eq!(
        resolve_output_path(out, Path::new("/tmp/a/b.md")).unwrap(),
        out.join("b.md")
    );
    assert!(matches!(
        resolve_output_path(out, Path::new("..")),
        Err(SnapmdError::InvalidOutputName(_))
    ));
    assert_eq!(
        default_output_name(Path::new("."), Path::new("/home/me/site")),
        "site-snapshot.md"
    );
    assert_eq!(
        default_output_name(Path::new("web/src"), Path::new("/home/me/web/src")),
        "src-snapshot.md"
    );
}
#[test]
fn test_missing_source_is_fatal() {
    let dir = tempdir().unwrap();
    let out_dir = dir.path().join("snapshots");
    let request = SnapshotRequest::new(dir.path().join("missing")).output_dir(&out_dir);
    let err = create_snapshot_at(&request, STAMP).unwrap_err();
    assert!(matches!(err, SnapmdError::SourceNotFound(_)));
    assert!(!out_dir.exists());
}
#[test]
fn test_source_file_is_rejected() {
    let dir = tempdir().unwrap();
    write(dir.path(), "lone.ts", b"1");
    let request = SnapshotRequest::new(dir.path().join("lone.ts"))
        .output_dir(dir.path().join("snapshots"));
    let err = create_snapshot_at(&request, STAMP).unwrap_err();
    assert!(matches!(err, SnapmdError::NotADirectory(_)));
}
#[test]
fn test_unusable_output_directory_is_fatal() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("src");
    write(&root, "main.ts", b"1");
    write(dir.path(), "snapshots", b"not a directory");
    let request = SnapshotRequest::new(&root).output_dir(dir.path().join("snapshots"));
    let err = create_snapshot_at(&request, STAMP).unwrap_err();
    assert!(matches!(err, SnapmdError::Io { .. }));
}
#[test]
fn test_invalid_utf8_is_replaced() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("docs");
    write(&root, "notes.txt", &[b'o', b'k', 0xff, b'!']);
    let out_dir = dir.path().join("snapshots");
    let request = SnapshotRequest::new(&root).output_dir(&out_dir);
    create_snapshot_at(&request, STAMP).unwrap();
    let doc = fs::read_to_string(out_dir.join("docs-snapshot.md")).unwrap();
    assert!(doc.contains("```text\nok\u{FFFD}!\n```"));
}
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);
impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
#[test]
fn test_progress_logged_at_info() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("web");
    write(&root, "index.html", b"<p>hi</p>");
    write(&root, "js/app.js", b"run();");
    let request = SnapshotRequest::new(&root).output_dir(dir.path().join("snapshots"));
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::with_default(subscriber, || create_snapshot_at(&request, STAMP)).unwrap();
    let logs = String::from_utf8_lossy(&logs.0.lock().unwrap()).into_owned();
    assert!(logs.contains("Found 2 files"), "{}", logs);
    assert!(logs.contains("Processing [1/2]: index.html"), "{}", logs);
    assert!(logs.contains("Processing [2/2]: js/app.js"), "{}", logs);
}
