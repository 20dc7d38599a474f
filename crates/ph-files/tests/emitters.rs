//! Both emitters must produce the same tree for the same writes.

use ph_core::traits::Emitter;
use ph_files::{DiskWriter, FileSystem};
use tempfile::TempDir;

const WRITES: [(&str, &str); 3] = [
    ("components/PhAcorn.astro", "---\n---\n<svg />"),
    ("index.d.ts", "export declare function PhAcorn(): any;\n"),
    (
        "index.js",
        "export { default as PhAcorn } from \"./components/PhAcorn.astro\";\n",
    ),
];

async fn replay(emitter: &mut dyn Emitter) {
    for (path, content) in WRITES {
        emitter.emit(path, content).await.unwrap();
    }
}

#[tokio::test]
async fn test_disk_and_memory_agree() {
    let temp = TempDir::new().unwrap();
    let mut disk = DiskWriter::new(temp.path().join("dist"));
    let mut memory = FileSystem::new();

    replay(&mut disk).await;
    replay(&mut memory).await;

    for path in memory.paths() {
        let on_disk = std::fs::read_to_string(disk.disk_path(path)).unwrap();
        assert_eq!(on_disk, memory.read_file(path).unwrap());
    }
    assert_eq!(memory.file_count(), WRITES.len());
}

#[tokio::test]
async fn test_repeated_runs_are_idempotent() {
    let temp = TempDir::new().unwrap();
    let mut disk = DiskWriter::new(temp.path());

    replay(&mut disk).await;
    let first = std::fs::read(temp.path().join("index.js")).unwrap();

    replay(&mut disk).await;
    let second = std::fs::read(temp.path().join("index.js")).unwrap();

    assert_eq!(first, second);
}
