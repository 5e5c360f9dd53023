mod config;
mod eval;
mod models;
mod ui;

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::config::{config_dir, load_config};
use crate::ui::{App, render};

fn main() -> io::Result<()> {
    // 配置文件路径 (~/.config/suanpan/config.toml)
    let config_path = config_dir()?.join("config.toml");
    let config = load_config(&config_path)?;

    // 创建应用状态
    let mut app = App::new(config);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        match crossterm::event::read()? {
            crossterm::event::Event::Key(key) => {
                if key.kind == crossterm::event::KeyEventKind::Press
                    && ui::handle_key_event(app, key.code)?
                {
                    break;
                }
            }
            crossterm::event::Event::Mouse(mouse) => {
                if ui::handle_mouse_event(app, mouse)? {
                    break;
                }
            }
            _ => {}
        }
    }
    Ok(())
}
