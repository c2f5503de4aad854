/// Example: Load a mesh-data file (.json or .obj) and render it in the terminal
///
/// Usage: cargo run --example load_model -- path/to/model.obj
use painter_core::{build_from_data, build_pyramid, load_model_data};
use painter_terminal::{init_tracing, TerminalApp};
use std::env;
use std::fs;
use std::io;
use std::path::Path;

fn main() -> io::Result<()> {
    init_tracing();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <model.json|model.obj>", args[0]);
        eprintln!("\nNo model file provided, using default pyramid...");
        let mut app = TerminalApp::new(build_pyramid(10, 100.0, 200.0))?;
        return app.run();
    }

    let path = Path::new(&args[1]);
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    println!("Loading model file: {}", path.display());

    let data = fs::read(path).map_err(|e| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("Failed to read model file: {}", e),
        )
    })?;

    let model = load_model_data(&data, extension)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    let mesh = build_from_data(&model)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    println!("Loaded {} triangles", mesh.triangle_count());
    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(mesh)?;
    app.run()?;

    println!("Thank you for using Painter!");
    Ok(())
}
