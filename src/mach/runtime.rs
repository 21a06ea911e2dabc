use super::*;
use crate::error;
use crate::lang::{Error, ErrorCode, Line, LineNumber};
use std::collections::VecDeque;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

const HELP: &[&str] = &[
    "BYE, CLEAR, CLS, END, STOP",
    "HELP, MEM, NEW, RUN, RETURN",
    "GOTO | GOSUB | LOAD | SAVE <exp>",
    "IF <exp> THEN <statement>",
    "INPUT <var>",
    "[LET] <var>=<exp>",
    "LIST [<exp>|PAUSE]",
    "PRINT <exp|str>[,<exp|str>][;]",
    "REM <any>",
];

/// Lines listed between pauses for `LIST PAUSE`.
const PAUSE_EVERY: usize = 10;

/// ## Events for the user interface
///
/// `execute` returns one of these each time the machine needs
/// something from its host, or has run out of cycles.

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// At the prompt waiting for a line.
    Stopped,
    /// Cycle budget used up. Call `execute` again.
    Running,
    Print(String),
    /// An INPUT statement waits for a value. Carries the prompt.
    Input(String),
    Error(Error),
    /// `LIST PAUSE` wants the operator to continue.
    Pause,
    Cls,
    Exit,
}

/// ## Execution states
///
/// Exactly one is active. `step` runs the active one and picks the next.

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Ready,
    GetInput,
    AutoRun,
    Exec,
    NextStatement,
    Print,
    NextChar(String),
    EndPrint,
    Input(Letter),
    FinishStatement,
    FinishStatement2,
}

/// ## The interpreter engine
///
/// Owns the program, the variables and both stacks. Text comes in
/// through `enter`; everything going out is queued as events.

pub struct Runtime {
    config: Config,
    listing: Listing,
    workspace: Line,
    line: LineNumber,
    next_line: LineNumber,
    scan: Scanner,
    vars: Var,
    values: Stack<Val>,
    gosubs: Stack<Gosub>,
    state: State,
    error: Option<Error>,
    last_error: Option<Error>,
    pending: VecDeque<String>,
    events: VecDeque<Event>,
    storage: Box<dyn Storage>,
    clock: Box<dyn Clock>,
    interrupted: bool,
    mid_line: bool,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::with_config(
            Config::default(),
            Box::new(MemoryStorage::default()),
            Box::new(SystemClock::default()),
        )
    }
}

impl Runtime {
    pub fn with_config(config: Config, storage: Box<dyn Storage>, clock: Box<dyn Clock>) -> Self {
        Runtime {
            config,
            listing: Listing::new(config.program_lines),
            workspace: Line::direct(""),
            line: None,
            next_line: None,
            scan: Scanner::default(),
            vars: Var::new(),
            values: Stack::new(config.value_stack_depth, ErrorCode::ExpressionTooComplex),
            gosubs: Stack::new(config.gosub_depth, ErrorCode::GosubStackOverflow),
            state: State::Ready,
            error: None,
            last_error: None,
            pending: VecDeque::default(),
            events: VecDeque::default(),
            storage,
            clock,
            interrupted: false,
            mid_line: false,
        }
    }

    /// Supplies the next line from the operator: a program line, a
    /// direct statement, or the reply to INPUT. Lines entered ahead
    /// of time are consumed in order.
    pub fn enter(&mut self, text: &str) {
        self.pending
            .push_back(text.trim_end_matches(&['\r', '\n'][..]).to_string());
    }

    /// Requests a stop at the next step boundary.
    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    pub fn listing(&self) -> Listing {
        self.listing.clone()
    }

    pub fn variable(&self, name: char) -> Option<Val> {
        let mut buf = [0; 4];
        Var::resolve(name.encode_utf8(&mut buf))
            .ok()
            .map(|letter| self.vars.fetch(letter))
    }

    /// The unreported error, if a step raised one.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// The most recently reported error, line number attached.
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn gosub_depth(&self) -> usize {
        self.gosubs.len()
    }

    /// True when nothing can happen until `enter` is called.
    pub fn is_idle(&self) -> bool {
        !self.interrupted
            && self.pending.is_empty()
            && match self.state {
                State::GetInput | State::Input(_) => true,
                _ => false,
            }
    }

    /// Runs until the machine waits for the operator.
    /// Does not return while a program loops forever; use `execute`
    /// to keep control.
    pub fn run_to_prompt(&mut self) {
        while !self.is_idle() {
            self.step();
        }
    }

    /// Drains queued output as text. Errors are rendered as reported.
    pub fn current_output(&mut self) -> String {
        let mut s = String::new();
        for event in self.events.drain(..) {
            match event {
                Event::Print(text) => s.push_str(&text),
                Event::Error(error) => s.push_str(&format!("{}\n", error)),
                _ => {}
            }
        }
        s
    }

    /// Runs at most `cycles` steps, returning early whenever there is
    /// an event for the host.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if let Some(event) = self.events.pop_front() {
                return event;
            }
            if self.is_idle() {
                if let State::Input(_) = self.state {
                    return Event::Input("? ".to_string());
                }
                return Event::Stopped;
            }
            self.step();
        }
        match self.events.pop_front() {
            Some(event) => event,
            None => Event::Running,
        }
    }

    /// Advances the state machine one transition.
    pub fn step(&mut self) -> State {
        if self.interrupted {
            self.interrupted = false;
            if self.state != State::GetInput {
                self.pending.clear();
                self.raise(error!(Stop));
                self.state = State::Ready;
            }
        }
        let state = std::mem::replace(&mut self.state, State::Ready);
        let next = match self.dispatch(state) {
            Ok(next) => next,
            Err(error) => {
                self.raise(error);
                State::Ready
            }
        };
        trace!(state = ?next, line = ?self.line, "step");
        self.state = next.clone();
        next
    }

    fn raise(&mut self, error: Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    fn dispatch(&mut self, state: State) -> Result<State> {
        match state {
            State::Ready => Ok(self.do_ready()),
            State::GetInput => Ok(self.do_get_input()),
            State::AutoRun => self.do_auto_run(),
            State::Exec => self.do_exec(),
            State::NextStatement => self.do_next_statement(),
            State::Print => self.do_print(),
            State::NextChar(buf) => self.do_next_char(buf),
            State::EndPrint => Ok(self.do_end_print()),
            State::Input(letter) => self.do_input(letter),
            State::FinishStatement => self.do_finish_statement(),
            State::FinishStatement2 => Ok(self.do_finish_statement_2()),
        }
    }

    fn write(&mut self, text: &str, newline: bool) {
        if newline {
            self.mid_line = false;
        } else if !text.is_empty() {
            self.mid_line = true;
        }
        if let Some(Event::Print(s)) = self.events.back_mut() {
            s.push_str(text);
            if newline {
                s.push('\n');
            }
            return;
        }
        let mut s = text.to_string();
        if newline {
            s.push('\n');
        }
        self.events.push_back(Event::Print(s));
    }

    fn evaluate(&mut self) -> Result<Val> {
        Evaluator::new(
            &mut self.scan,
            &self.vars,
            &mut self.values,
            self.clock.as_ref(),
        )
        .evaluate()
    }

    fn do_ready(&mut self) -> State {
        if let Some(error) = self.error.take() {
            let error = if error.is_direct() {
                error.in_line_number(self.line)
            } else {
                error
            };
            debug!(code = error.code().number(), %error, "report");
            if self.mid_line {
                self.write("", true);
            }
            self.events.push_back(Event::Error(error.clone()));
            self.last_error = Some(error);
        }
        self.values.clear();
        self.line = None;
        self.next_line = None;
        State::GetInput
    }

    fn do_get_input(&mut self) -> State {
        match self.pending.pop_front() {
            Some(text) => {
                self.workspace = Line::direct(&text);
                State::AutoRun
            }
            None => State::GetInput,
        }
    }

    fn do_auto_run(&mut self) -> Result<State> {
        self.line = None;
        if self.workspace.text().chars().count() > self.config.max_line_len {
            return Err(error!(LineBufferOverflow));
        }
        self.scan.load(self.workspace.text());
        let number = self.scan.read_number()?;
        if number == Val::Integer(0) {
            self.scan.skip_space();
            if self.scan.at_end() {
                return Ok(State::Ready);
            }
            return Ok(State::NextStatement);
        }
        match number.as_line_number() {
            Some(n) => {
                let text = self.scan.rest();
                self.listing.put(n, &text)?;
                debug!(line = n, "enter");
                Ok(State::Ready)
            }
            None => Err(error!(InvalidLineNumber)),
        }
    }

    fn do_exec(&mut self) -> Result<State> {
        let number = match self.line {
            Some(n) => n,
            None => return Err(error!(InternalError; "NO LINE")),
        };
        match self.listing.get(number) {
            Some(line) => {
                let text = line.text().to_string();
                self.scan.load(&text);
                Ok(State::NextStatement)
            }
            None => Err(error!(LineNotFound)),
        }
    }

    fn do_next_statement(&mut self) -> Result<State> {
        let label = self.scan.read_label()?;
        match label.as_str() {
            "IF" => self.r#if(),
            "REM" => {
                self.scan.skip_to_end();
                Ok(State::FinishStatement)
            }
            "INPUT" => {
                let label = self.scan.read_label()?;
                Ok(State::Input(Var::resolve(&label)?))
            }
            "PRINT" => Ok(State::Print),
            "RUN" => Ok(self.r#run()),
            "GOTO" => self.r#goto(),
            "GOSUB" => self.r#gosub(),
            "RETURN" => self.r#return(),
            "NEW" => Ok(self.r#new()),
            "CLEAR" => {
                self.vars.clear();
                Ok(State::FinishStatement)
            }
            "CLS" => {
                self.events.push_back(Event::Cls);
                Ok(State::FinishStatement)
            }
            "HELP" => {
                for text in HELP {
                    self.write(text, true);
                }
                Ok(State::FinishStatement)
            }
            "MEM" => {
                let text = format!("   {} Bytes Free", self.listing.bytes_free());
                self.write(&text, true);
                Ok(State::FinishStatement)
            }
            "END" => Ok(State::Ready),
            "STOP" => Err(error!(Stop)),
            "BYE" => {
                self.events.push_back(Event::Exit);
                Ok(State::Ready)
            }
            "LIST" => self.r#list(),
            "SAVE" => self.r#save(),
            "LOAD" => self.r#load(),
            "LET" => {
                let label = self.scan.read_label()?;
                self.r#let(&label)
            }
            _ => self.r#let(&label),
        }
    }

    fn r#if(&mut self) -> Result<State> {
        if self.evaluate()?.is_zero() {
            self.scan.skip_to_end();
            return Ok(State::FinishStatement);
        }
        match self.scan.read_label() {
            Ok(label) if label == "THEN" => Ok(State::NextStatement),
            _ => Err(error!(ThenExpected)),
        }
    }

    fn r#let(&mut self, label: &str) -> Result<State> {
        let letter = Var::resolve(label)?;
        self.scan.skip_space();
        if self.scan.peek() != Some('=') {
            return Err(error!(EqualsExpected));
        }
        self.scan.advance();
        let value = self.evaluate()?;
        self.vars.store(letter, value);
        Ok(State::FinishStatement)
    }

    fn r#run(&mut self) -> State {
        debug!(lines = self.listing.len(), "run");
        self.vars.clear();
        self.gosubs.clear();
        self.values.clear();
        self.next_line = self.listing.first().and_then(|line| line.number());
        State::FinishStatement2
    }

    fn r#new(&mut self) -> State {
        debug!("new");
        self.listing.clear();
        self.vars.clear();
        self.gosubs.clear();
        self.values.clear();
        if self.line.is_none() {
            State::FinishStatement
        } else {
            State::Ready
        }
    }

    /// Evaluates a jump target and finds it in the program. Targets
    /// after the current line are searched from here, anything else
    /// from the top.
    fn target(&mut self) -> Result<u16> {
        let target = match self.evaluate()?.as_line_number() {
            Some(n) => n,
            None => return Err(error!(LineNotFound)),
        };
        let from = match self.line {
            Some(current) if target > current => current,
            _ => 0,
        };
        self.listing
            .iterate_from(from)
            .take_while(|line| line.number() <= Some(target))
            .find(|line| line.number() == Some(target))
            .and(Some(target))
            .ok_or_else(|| error!(LineNotFound))
    }

    fn r#goto(&mut self) -> Result<State> {
        let target = self.target()?;
        self.line = Some(target);
        Ok(State::Exec)
    }

    fn r#gosub(&mut self) -> Result<State> {
        let target = self.target()?;
        let resume = self
            .line
            .and_then(|n| self.listing.after(n))
            .and_then(|line| line.number());
        self.gosubs.push(Gosub { resume })?;
        self.line = Some(target);
        Ok(State::Exec)
    }

    fn r#return(&mut self) -> Result<State> {
        if self.gosubs.is_empty() {
            return Err(error!(ReturnWithoutGosub));
        }
        let gosub = self.gosubs.pop()?;
        match gosub.resume {
            None => Ok(State::Ready),
            Some(n) if self.listing.get(n).is_some() => {
                self.line = Some(n);
                Ok(State::Exec)
            }
            Some(_) => Err(error!(LineNotFound)),
        }
    }

    fn r#list(&mut self) -> Result<State> {
        let number = self.scan.read_number()?;
        let mut pause = false;
        let only = if number == Val::Integer(0) {
            let position = self.scan.position();
            match self.scan.read_label() {
                Ok(label) if label == "PAUSE" => pause = true,
                _ => self.scan.seek(position),
            }
            None
        } else {
            match number.as_line_number() {
                Some(n) => Some(n),
                None => return Err(error!(InvalidLineNumber)),
            }
        };
        let lines: Vec<String> = match only {
            Some(n) => self.listing.get(n).map(Line::listing).into_iter().collect(),
            None => self.listing.lines().map(Line::listing).collect(),
        };
        for (index, text) in lines.iter().enumerate() {
            self.write(text, true);
            if pause && (index + 1) % PAUSE_EVERY == 0 {
                self.events.push_back(Event::Pause);
            }
        }
        Ok(State::FinishStatement)
    }

    /// A quoted name is used as is. An expression `n` names `TINYBASn`.
    fn program_name(&mut self) -> Result<String> {
        self.scan.skip_space();
        if self.scan.peek() != Some('"') {
            return Ok(format!("TINYBAS{}", self.evaluate()?));
        }
        self.scan.advance();
        let mut name = String::new();
        loop {
            match self.scan.peek() {
                None => return Err(error!(UnterminatedString)),
                Some('"') => break,
                Some(ch) => name.push(ch),
            }
            self.scan.advance();
        }
        self.scan.advance();
        Ok(name)
    }

    fn r#save(&mut self) -> Result<State> {
        let name = self.program_name()?;
        let lines: Vec<Line> = self.listing.lines().cloned().collect();
        self.storage.save(&name, &lines)?;
        debug!(%name, lines = lines.len(), "save");
        Ok(State::FinishStatement)
    }

    fn r#load(&mut self) -> Result<State> {
        let name = self.program_name()?;
        let lines = self.storage.load(&name)?;
        self.listing.replace(lines, self.config.max_line_len)?;
        self.gosubs.clear();
        debug!(%name, lines = self.listing.len(), "load");
        if self.line.is_none() {
            Ok(State::FinishStatement)
        } else {
            Ok(State::Ready)
        }
    }

    fn do_print(&mut self) -> Result<State> {
        self.scan.skip_space();
        match self.scan.peek() {
            None | Some(':') => {
                self.write("", true);
                Ok(State::FinishStatement)
            }
            Some('"') => {
                self.scan.advance();
                Ok(State::NextChar(String::new()))
            }
            Some(_) => {
                let value = self.evaluate()?;
                self.write(&value.to_string(), false);
                Ok(State::EndPrint)
            }
        }
    }

    fn do_next_char(&mut self, mut buf: String) -> Result<State> {
        match self.scan.peek() {
            None => Err(error!(UnterminatedString)),
            Some('"') => {
                self.scan.advance();
                if self.scan.peek() == Some('"') {
                    self.scan.advance();
                    buf.push('"');
                    return Ok(State::NextChar(buf));
                }
                self.write(&buf, false);
                Ok(State::EndPrint)
            }
            Some(ch) => {
                self.scan.advance();
                buf.push(ch);
                Ok(State::NextChar(buf))
            }
        }
    }

    fn do_end_print(&mut self) -> State {
        self.scan.skip_space();
        match self.scan.peek() {
            Some(',') => {
                self.scan.advance();
                self.write(" ", false);
                State::Print
            }
            Some(';') => {
                self.scan.advance();
                State::FinishStatement
            }
            _ => {
                self.write("", true);
                State::FinishStatement
            }
        }
    }

    fn do_input(&mut self, letter: Letter) -> Result<State> {
        let text = match self.pending.pop_front() {
            Some(text) => text,
            None => return Ok(State::Input(letter)),
        };
        let mut reply = Scanner::new(&text);
        let value = reply.read_number()?;
        reply.skip_space();
        if !reply.at_end() {
            return Err(error!(InvalidNumber));
        }
        self.vars.store(letter, value);
        Ok(State::FinishStatement)
    }

    fn do_finish_statement(&mut self) -> Result<State> {
        self.scan.skip_space();
        match self.scan.peek() {
            Some(':') => {
                self.scan.advance();
                Ok(State::NextStatement)
            }
            None => match self.line {
                None => Ok(State::Ready),
                Some(n) => {
                    self.next_line = self.listing.after(n).and_then(|line| line.number());
                    Ok(State::FinishStatement2)
                }
            },
            Some(_) => Err(error!(EndOfStatementExpected)),
        }
    }

    fn do_finish_statement_2(&mut self) -> State {
        match self.next_line.take() {
            Some(n) => {
                self.line = Some(n);
                State::Exec
            }
            None => State::Ready,
        }
    }
}
