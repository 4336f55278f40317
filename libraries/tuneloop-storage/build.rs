fn main() {
    // Rebuild when embedded migrations change
    println!("cargo:rerun-if-changed=migrations");
}
