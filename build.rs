#[cfg(target_os = "windows")]
fn main() {
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os != "windows" {
        return;
    }

    let mut res = winresource::WindowsResource::new();
    res.set("ProductName", "Styleguide Widgets");
    res.set("FileDescription", "Styleguide media widgets preview");
    res.set("InternalName", "styleguide-widgets");
    res.set("OriginalFilename", "styleguide-widgets.exe");
    res.set("CompanyName", "AD-Archer");
    res.set("LegalCopyright", "Copyright (c) 2026 AD-Archer");
    if let Err(err) = res.compile() {
        panic!("failed to compile Windows resources: {err}");
    }
}

#[cfg(not(target_os = "windows"))]
fn main() {}
