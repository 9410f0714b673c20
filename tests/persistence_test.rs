use assert_cmd::cargo_bin;
use std::io::Write;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_state_file_persistence_recovery() {
    let dir = tempdir().unwrap();
    let state_file = dir.path().join("cart.json");

    // 1. First run: add one product
    let mut csv1 = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv1, "action, id, name, description, price, image, quantity").unwrap();
    writeln!(csv1, "add, 1, Pho Bo, , 12.99, , 1").unwrap();

    let mut cmd1 = Command::new(cargo_bin!("cartkeep"));
    cmd1.arg(csv1.path()).arg("--state-file").arg(&state_file);

    let output1 = cmd1.output().expect("Failed to execute command");
    assert!(output1.status.success());
    let stdout1 = String::from_utf8_lossy(&output1.stdout);
    assert!(stdout1.contains(",subtotal,,,12.99"));
    assert!(state_file.exists());

    // 2. Second run: same state file, add another product
    let mut csv2 = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv2, "action, id, name, description, price, image, quantity").unwrap();
    writeln!(csv2, "add, 2, Banh Mi, , 8.99, , 2").unwrap();

    let mut cmd2 = Command::new(cargo_bin!("cartkeep"));
    cmd2.arg(csv2.path()).arg("--state-file").arg(&state_file);

    let output2 = cmd2.output().expect("Failed to execute command");
    assert!(output2.status.success());
    let stdout2 = String::from_utf8_lossy(&output2.stdout);

    // Should have recovered 12.99 and added 17.98 = 30.97
    assert!(stdout2.contains("1,Pho Bo,1,12.99,12.99"));
    assert!(stdout2.contains("2,Banh Mi,2,8.99,17.98"));
    assert!(stdout2.contains(",items,3,,"));
    assert!(stdout2.contains(",subtotal,,,30.97"));
}

#[test]
fn test_clear_deletes_state_file() {
    let dir = tempdir().unwrap();
    let state_file = dir.path().join("cart.json");

    let mut csv1 = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv1, "action, id, name, description, price, image, quantity").unwrap();
    writeln!(csv1, "add, 1, Pho Bo, , 12.99, , 1").unwrap();

    let mut cmd1 = Command::new(cargo_bin!("cartkeep"));
    cmd1.arg(csv1.path()).arg("--state-file").arg(&state_file);
    assert!(cmd1.output().unwrap().status.success());
    assert!(state_file.exists());

    // Clear removes the slot itself, not just its contents
    let mut csv2 = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv2, "action, id, name, description, price, image, quantity").unwrap();
    writeln!(csv2, "clear, , , , , ,").unwrap();

    let mut cmd2 = Command::new(cargo_bin!("cartkeep"));
    cmd2.arg(csv2.path()).arg("--state-file").arg(&state_file);

    let output2 = cmd2.output().unwrap();
    assert!(output2.status.success());
    let stdout2 = String::from_utf8_lossy(&output2.stdout);
    assert!(stdout2.contains(",items,0,,"));
    assert!(stdout2.contains(",subtotal,,,0"));
    assert!(!state_file.exists());

    // A third run starts from an uninitialized slot
    let mut csv3 = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv3, "action, id, name, description, price, image, quantity").unwrap();

    let mut cmd3 = Command::new(cargo_bin!("cartkeep"));
    cmd3.arg(csv3.path()).arg("--state-file").arg(&state_file);

    let output3 = cmd3.output().unwrap();
    assert!(output3.status.success());
    let stdout3 = String::from_utf8_lossy(&output3.stdout);
    assert!(stdout3.contains(",items,0,,"));
}
