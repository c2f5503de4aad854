/// Painter Terminal Demo - Rotating Pyramid
///
/// Controls:
///   - Arrow Keys: Rotate the pyramid
///   - W/S: Move the camera in and out
///   - Q/ESC: Quit
use painter_core::build_pyramid;
use painter_terminal::{init_tracing, TerminalApp};
use std::io;

fn main() -> io::Result<()> {
    init_tracing();
    println!("Painter Terminal Renderer - Loading...");

    let pyramid = build_pyramid(10, 100.0, 200.0);

    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    let mut app = TerminalApp::new(pyramid)?;
    app.run()?;

    println!("Thank you for using Painter!");
    Ok(())
}
