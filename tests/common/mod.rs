use zxbasic::mach::{Event, Session};

pub fn exec(session: &mut Session, input: &str) -> String {
    let mut s = String::new();
    match session.enter(input) {
        Event::Stopped => {}
        Event::Errors(errors) => {
            for error in errors.iter() {
                s.push_str(&format!("{}\n", error));
            }
        }
        Event::Print(ps) => {
            s.push_str(&ps);
        }
        Event::List(lines) => {
            for line in lines {
                s.push_str(&format!("{}\n", line));
            }
        }
        Event::Vars(vars) => {
            for var in vars {
                s.push_str(&format!("{}\n", var));
            }
        }
        Event::Load(f) => {
            s.push_str(&format!("LOAD {}\n", f));
        }
        Event::Save(f) => {
            s.push_str(&format!("SAVE {}\n", f));
        }
    }
    s
}

pub fn exec_all(session: &mut Session, inputs: &[&str]) -> String {
    inputs.iter().map(|input| exec(session, input)).collect()
}
