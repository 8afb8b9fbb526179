use std::process::Command;

fn main() {
    // Only rebuild CSS when template or CSS files change
    println!("cargo:rerun-if-changed=assets/css/input.css");
    println!("cargo:rerun-if-changed=templates/");

    let status = Command::new("tailwindcss")
        .args([
            "-i",
            "assets/css/input.css",
            "-o",
            "assets/css/output.css",
            "--minify",
        ])
        .status();

    match status {
        Ok(s) if s.success() => {
            println!("cargo:warning=Tailwind CSS compiled successfully");
        }
        _ => {
            println!("cargo:warning=Tailwind CLI not found, using fallback CSS");
            let fallback = r#"*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, -apple-system, sans-serif; line-height: 1.6; -webkit-font-smoothing: antialiased; }
.theme-classic { color: #1c1917; background: #fafaf9; }
.theme-refined { color: #0f172a; background: #fff; font-family: Georgia, serif; }
.min-h-screen { min-height: 100vh; }
.mx-auto { margin-left: auto; margin-right: auto; }
.max-w-6xl { max-width: 72rem; }
.px-4 { padding-left: 1rem; padding-right: 1rem; }
.py-3 { padding-top: 0.75rem; padding-bottom: 0.75rem; }
.py-6 { padding-top: 1.5rem; padding-bottom: 1.5rem; }
.py-8 { padding-top: 2rem; padding-bottom: 2rem; }
.pt-2 { padding-top: 0.5rem; }
.mb-2 { margin-bottom: 0.5rem; }
.mb-4 { margin-bottom: 1rem; }
.ml-auto { margin-left: auto; }
.mt-1 { margin-top: 0.25rem; }
.mt-2 { margin-top: 0.5rem; }
.flex { display: flex; }
.grid { display: grid; gap: 1rem; }
.items-center { align-items: center; }
.justify-between { justify-content: space-between; }
.gap-2 { gap: 0.5rem; }
.gap-3 { gap: 0.75rem; }
.gap-4 { gap: 1rem; }
.text-center { text-align: center; }
.text-xs { font-size: 0.75rem; }
.text-sm { font-size: 0.875rem; }
.text-lg { font-size: 1.125rem; }
.text-xl { font-size: 1.25rem; }
.text-2xl { font-size: 1.5rem; }
.font-medium { font-weight: 500; }
.font-semibold { font-weight: 600; }
.font-bold { font-weight: 700; }
.text-stone-400 { color: #a8a29e; }
.text-stone-500 { color: #78716c; }
.text-stone-600 { color: #57534e; }
.border-b { border-bottom: 1px solid #e7e5e4; }
.border-t { border-top: 1px solid #e7e5e4; }
.whitespace-pre-wrap { white-space: pre-wrap; }
a { color: inherit; text-decoration: none; }
a:hover { opacity: 0.8; }
.layout { display: grid; grid-template-columns: 16rem 1fr; gap: 1.5rem; }
.site-header { background: #fff; }
.nav-link { font-size: 0.875rem; color: #57534e; }
.nav-link-active { font-weight: 600; color: #1c1917; }
.card { background: #fff; border-radius: 0.75rem; border: 1px solid #e7e5e4; padding: 1.5rem; box-shadow: 0 1px 2px 0 rgb(0 0 0 / 0.05); }
.card-raised { border-color: transparent; border-radius: 1rem; box-shadow: 0 10px 15px -3px rgb(0 0 0 / 0.1); }
.btn { display: inline-flex; align-items: center; justify-content: center; padding: 0.5rem 1rem; border-radius: 0.5rem; font-size: 0.875rem; font-weight: 500; transition: all 0.15s; cursor: pointer; text-decoration: none; }
.btn-primary { background: #1c1917; color: #fff; border: none; }
.btn-primary:hover { background: #44403c; }
.btn-secondary { background: #fff; color: #1c1917; border: 1px solid #d6d3d1; }
.btn-secondary:hover { background: #f5f5f4; }
.btn-pill { border-radius: 9999px; }
.tabs { display: flex; gap: 0.5rem; border-bottom: 1px solid #e7e5e4; }
.tab { padding: 0.5rem 0.75rem; font-size: 0.875rem; color: #57534e; }
.tab-pill { border-radius: 9999px; }
.tab-active { font-weight: 600; color: #1c1917; border-bottom: 2px solid #1c1917; }
.tab-pill.tab-active { background: #1c1917; color: #fff; border: none; }
.badge { display: inline-flex; align-items: center; padding: 0.125rem 0.5rem; font-size: 0.75rem; font-weight: 500; border-radius: 0.25rem; }
.badge-soft { border-radius: 9999px; }
.badge-solid { color: #fff; }
.badge-solid.tone-green { background: #16a34a; }
.badge-solid.tone-purple { background: #9333ea; }
.badge-solid.tone-red { background: #dc2626; }
.badge-solid.tone-blue { background: #2563eb; }
.badge-solid.tone-orange { background: #f97316; }
.badge-solid.tone-gray { background: #78716c; }
.badge-soft.tone-green { background: #dcfce7; color: #166534; }
.badge-soft.tone-purple { background: #f3e8ff; color: #6b21a8; }
.badge-soft.tone-red { background: #fee2e2; color: #991b1b; }
.badge-soft.tone-blue { background: #dbeafe; color: #1e40af; }
.badge-soft.tone-orange { background: #ffedd5; color: #9a3412; }
.badge-soft.tone-gray { background: #f5f5f4; color: #44403c; }
.avatar { width: 2.5rem; height: 2.5rem; border-radius: 9999px; }
.avatar-sm { width: 1.5rem; height: 1.5rem; }
.avatar-lg { width: 5rem; height: 5rem; }
.input { width: 100%; border: 1px solid #d6d3d1; border-radius: 0.5rem; padding: 0.5rem 0.75rem; font: inherit; }
.field { display: block; margin-bottom: 0.5rem; }
.event-image { width: 100%; border-radius: 0.5rem; }
.map-placeholder { background: #f5f5f4; border-radius: 0.5rem; padding: 1.5rem; text-align: center; }
.notice { background: #f5f5f4; border-radius: 0.5rem; padding: 1rem; }
.link-button { background: none; border: none; color: #57534e; cursor: pointer; font: inherit; }
.liked { color: #dc2626; font-weight: 600; }
"#;
            std::fs::create_dir_all("assets/css").ok();
            std::fs::write("assets/css/output.css", fallback).ok();
        }
    }
}
