use srcdump::{run, ExportBuilder, ExportConfig, ExportError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}
fn config(root: &Path, output: &Path) -> ExportConfig {
    ExportBuilder::new(root).output(output).build()
}
fn without_date(report: &str) -> String {
    report
        .lines()
        .filter(|l| !l.starts_with("Date: "))
        .collect::<Vec<_>>()
        .join("\n")
}
#[test]
fn integration_android_scenario() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("MyApp");
    write(&root, "app/src/Main.kt", &"/".repeat(50));
    write(&root, "build/output.apk", "0123456789");
    write(&root, "app/res/icon.png", "0123456789");
    write(&root, "README.md", &"r".repeat(1200));
    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("export.txt");

    let summary = run(&config(&root, &output)).unwrap();
    let report = fs::read_to_string(&output).unwrap();
    assert!(report.starts_with(
        "ANDROID PROJECT EXPORT\n====================\nProject: MyApp\nDate: "
    ));
    assert!(report.contains(
        "# FILE: README.md\n# -------------------------------------\n\
         # PATH: README.md\n# TYPE: md\n"
    ));
    assert!(report.contains("# FILE: Main.kt\n"));
    assert!(!report.contains("output.apk"));
    assert!(!report.contains("icon.png"));
    assert_eq!(report.matches("# FILE: ").count(), 2);
    assert_eq!(summary.stats.written, 2);
    assert_eq!(summary.bytes, report.len() as u64);
}
#[test]
fn integration_header_and_first_record_spacing() {
    let dir = tempdir().unwrap();
    write(dir.path(), "Main.kt", "fun main() {}\n");
    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("export.txt");
    run(&config(dir.path(), &output)).unwrap();
    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("====================\n\n\n\n# FILE: Main.kt\n"));
    assert!(report.ends_with("fun main() {}\n\n# END OF FILE: Main.kt\n"));
}
#[test]
fn integration_idempotent_except_date() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a/One.kt", "one");
    write(dir.path(), "a/b/Two.kt", "two");
    write(dir.path(), "c/Three.xml", "<three/>");
    write(dir.path(), "build/Gone.kt", "gone");
    let out_dir = tempdir().unwrap();
    let first = out_dir.path().join("first.txt");
    let second = out_dir.path().join("second.txt");
    run(&config(dir.path(), &first)).unwrap();
    run(&config(dir.path(), &second)).unwrap();
    let first = fs::read_to_string(first).unwrap();
    let second = fs::read_to_string(second).unwrap();
    assert_eq!(without_date(&first), without_date(&second));
}
#[test]
fn integration_paths_resolve_to_exportable_files() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, "app/src/main/java/Main.java", "class Main {}");
    write(root, "app/src/main/res/values/strings.xml", "<resources/>");
    write(root, "app/build/tmp/Gen.java", "gen");
    write(root, "settings.gradle", "include ':app'");
    write(root, "docs/manual.pdf", "pdf");
    fs::write(root.join("huge.txt"), "x".repeat(2 * 1024 * 1024)).unwrap();
    let out_dir = tempdir().unwrap();
    let output = out_dir.path().join("export.txt");
    let config = config(root, &output);
    run(&config).unwrap();

    let report = fs::read_to_string(&output).unwrap();
    let paths: Vec<PathBuf> = report
        .lines()
        .filter_map(|l| l.strip_prefix("# PATH: "))
        .map(PathBuf::from)
        .collect();
    assert_eq!(paths.len(), 3);
    for rel in paths {
        let full = root.join(&rel);
        let meta = fs::metadata(&full).unwrap();
        assert!(meta.is_file());
        assert!(meta.len() <= config.max_file_size);
        let normalized = format!("/{}", rel.to_string_lossy().replace('\\', "/"));
        for d in &config.skip_dirs {
            assert!(!normalized.contains(&format!("/{}/", d)));
        }
        let ext = rel
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()));
        assert!(ext.is_none_or(|e| !config.skip_extensions.contains(&e)));
    }
}
#[test]
fn integration_output_inside_root_is_not_exported() {
    let dir = tempdir().unwrap();
    write(dir.path(), "Main.kt", "main");
    write(dir.path(), "android_project_export.txt", "stale export");
    let output = dir.path().join("android_project_export.txt");
    run(&config(dir.path(), &output)).unwrap();
    let report = fs::read_to_string(&output).unwrap();
    assert!(!report.contains("stale export"));
    assert!(!report.contains("# FILE: android_project_export.txt"));
    assert!(report.contains("# FILE: Main.kt"));
}
#[test]
fn integration_missing_root_leaves_output_untouched() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("export.txt");
    fs::write(&output, "previous").unwrap();
    let err = run(&config(&dir.path().join("nope"), &output)).unwrap_err();
    assert!(matches!(err, ExportError::RootNotFound(_)));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}
#[test]
fn integration_unwritable_output_is_an_error() {
    let dir = tempdir().unwrap();
    write(dir.path(), "Main.kt", "main");
    let output = dir.path().join("no/such/dir/export.txt");
    let err = run(&config(dir.path(), &output)).unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
}
