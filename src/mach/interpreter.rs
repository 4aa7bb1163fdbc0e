use super::{Direction, DisplayTarget, Flash, Hardware, Led, Motor, Switch, Var};
use crate::error;
use crate::lang::token::{Operator, Token, Word};
use crate::lang::{Error, Tokenizer};

type Result<T> = std::result::Result<T, Error>;

/// Longest string literal passed to the output or the display.
pub const MAX_STRINGLEN: usize = 40;
/// Channels below this read the ADC.
pub const ADC_CHANNELS: u32 = 8;
/// `sense` channels 16 through 19 read switches A through D.
pub const SWITCH_CHANNELS: u32 = 16;
/// Wheel encoder counts per 100 units of `move` distance.
pub const WHEEL_CONSTANT: i32 = 50;

/// ## Statement interpreter
///
/// Executes a program straight from its text. Expressions are evaluated
/// while they are scanned and loops rewind the tokenizer to a saved
/// mark, so nothing but the variables and two motor speeds is kept
/// between statements.
pub struct Interpreter<'a, H: Hardware> {
    tokenizer: Tokenizer<'a>,
    var: Var,
    hardware: H,
    left_speed: i16,
    right_speed: i16,
    ended: bool,
    halted: bool,
}

impl<'a, H: Hardware> Interpreter<'a, H> {
    pub fn new(program: &'a [u8], hardware: H) -> Interpreter<'a, H> {
        Interpreter {
            tokenizer: Tokenizer::new(program),
            var: Var::new(),
            hardware,
            left_speed: 0,
            right_speed: 0,
            ended: false,
            halted: false,
        }
    }

    pub fn init(&mut self, program: &'a [u8]) {
        self.tokenizer.init(program);
        self.var.clear();
        self.left_speed = 0;
        self.right_speed = 0;
        self.ended = false;
        self.halted = false;
    }

    /// Runs exactly one top level statement. A loop statement runs all
    /// of its iterations before this returns. After an error the
    /// program is halted; hardware actions already taken stay in effect.
    pub fn run_one_statement(&mut self) -> Result<()> {
        if self.is_finished() {
            return Ok(());
        }
        let result = self.statement();
        if result.is_err() {
            self.halted = true;
        }
        result
    }

    pub fn is_finished(&self) -> bool {
        self.ended || self.halted || self.tokenizer.is_finished()
    }

    /// Stops the program; no further statements will run.
    pub fn halt(&mut self) {
        self.halted = true;
    }

    pub fn set_variable(&mut self, index: usize, value: i16) {
        self.var.store(index, value);
    }

    pub fn variable(&self, index: usize) -> i16 {
        self.var.fetch(index)
    }

    /// Speeds set by the last `speed` statement.
    pub fn speeds(&self) -> (i16, i16) {
        (self.left_speed, self.right_speed)
    }

    pub fn hardware(&self) -> &H {
        &self.hardware
    }

    pub fn hardware_mut(&mut self) -> &mut H {
        &mut self.hardware
    }

    pub fn into_hardware(self) -> H {
        self.hardware
    }

    fn accept(&mut self, token: Token) -> Result<()> {
        if self.tokenizer.token() != token {
            return Err(self.expected(token));
        }
        self.tokenizer.advance();
        Ok(())
    }

    fn expected(&self, token: Token) -> Error {
        let offset = self.tokenizer.offset();
        if let Token::RBrace = token {
            if let Token::EndOfInput = self.tokenizer.token() {
                return error!(MissingClosingBrace, ..offset);
            }
        }
        let message = match token {
            Token::Number => "EXPECTED NUMBER".to_string(),
            Token::String => "EXPECTED STRING".to_string(),
            Token::Variable => "EXPECTED VARIABLE".to_string(),
            Token::Word(word) => format!("EXPECTED {}", word.to_string().to_uppercase()),
            Token::Operator(op) => format!("EXPECTED {}", op),
            Token::LParen => "EXPECTED LEFT PARENTHESIS".to_string(),
            Token::RParen => "EXPECTED RIGHT PARENTHESIS".to_string(),
            Token::LBrace => "EXPECTED LEFT BRACE".to_string(),
            Token::RBrace => "EXPECTED RIGHT BRACE".to_string(),
            Token::Comma => "EXPECTED COMMA".to_string(),
            Token::Semicolon => "EXPECTED END OF STATEMENT".to_string(),
            Token::Error | Token::EndOfInput => "UNEXPECTED TOKEN".to_string(),
        };
        error!(SyntaxError, ..offset; message)
    }

    /// Consumes a `;`. A `}` or the end of the program also ends a
    /// statement but is left for the enclosing block.
    fn end_of_statement(&mut self) -> Result<()> {
        match self.tokenizer.token() {
            Token::Semicolon => {
                self.tokenizer.advance();
                Ok(())
            }
            Token::RBrace | Token::EndOfInput => Ok(()),
            _ => Err(self.expected(Token::Semicolon)),
        }
    }

    /// A block statement ends with its `}`. A `;` after it is optional.
    fn end_of_block_statement(&mut self) {
        if self.tokenizer.token() == Token::Semicolon {
            self.tokenizer.advance();
        }
    }

    fn number_operand(&mut self) -> Result<u32> {
        if self.tokenizer.token() != Token::Number {
            return Err(self.expected(Token::Number));
        }
        let n = self.tokenizer.number();
        self.tokenizer.advance();
        Ok(n)
    }

    fn variable_operand(&mut self) -> Result<usize> {
        if self.tokenizer.token() != Token::Variable {
            return Err(self.expected(Token::Variable));
        }
        let index = self.tokenizer.variable_index();
        self.tokenizer.advance();
        Ok(index)
    }

    fn stop_check(&mut self) -> Result<()> {
        if self.hardware.stop_requested() {
            return Err(error!(Break, ..self.tokenizer.offset()));
        }
        Ok(())
    }

    fn factor(&mut self) -> Result<i16> {
        match self.tokenizer.token() {
            Token::Number => {
                let offset = self.tokenizer.offset();
                let n = self.number_operand()?;
                if n > i16::max_value() as u32 {
                    return Err(error!(Overflow, ..offset));
                }
                Ok(n as i16)
            }
            Token::Variable => {
                let index = self.variable_operand()?;
                Ok(self.var.fetch(index))
            }
            Token::LParen => {
                self.tokenizer.advance();
                let r = self.relation()?;
                self.accept(Token::RParen)?;
                Ok(r)
            }
            Token::Operator(Operator::Minus) => {
                self.tokenizer.advance();
                Ok(self.factor()?.wrapping_neg())
            }
            _ => Err(error!(SyntaxError, ..self.tokenizer.offset(); "EXPECTED EXPRESSION")),
        }
    }

    fn term(&mut self) -> Result<i16> {
        let mut f1 = self.factor()?;
        loop {
            let op = match self.tokenizer.token() {
                Token::Operator(op) if op.is_multiplicative() => op,
                _ => return Ok(f1),
            };
            let offset = self.tokenizer.offset();
            self.tokenizer.advance();
            let f2 = self.factor()?;
            if f2 == 0 && op != Operator::Multiply {
                return Err(error!(DivisionByZero, ..offset));
            }
            f1 = match op {
                Operator::Multiply => f1.wrapping_mul(f2),
                Operator::Divide => f1.wrapping_div(f2),
                _ => f1.wrapping_rem(f2),
            };
        }
    }

    fn expr(&mut self) -> Result<i16> {
        let mut t1 = self.term()?;
        loop {
            let op = match self.tokenizer.token() {
                Token::Operator(op) if op.is_additive() => op,
                _ => return Ok(t1),
            };
            self.tokenizer.advance();
            let t2 = self.term()?;
            t1 = match op {
                Operator::Plus => t1.wrapping_add(t2),
                Operator::Minus => t1.wrapping_sub(t2),
                Operator::And => t1 & t2,
                _ => t1 | t2,
            };
        }
    }

    fn relation(&mut self) -> Result<i16> {
        let mut r1 = self.expr()?;
        loop {
            let op = match self.tokenizer.token() {
                Token::Operator(op) if op.is_relational() => op,
                _ => return Ok(r1),
            };
            self.tokenizer.advance();
            let r2 = self.expr()?;
            r1 = match op {
                Operator::Less => (r1 < r2) as i16,
                Operator::Greater => (r1 > r2) as i16,
                _ => (r1 == r2) as i16,
            };
        }
    }

    fn statement(&mut self) -> Result<()> {
        let token = self.tokenizer.token();
        log::trace!("statement {} at {}", token, self.tokenizer.offset());
        match token {
            Token::Variable => self.let_statement(),
            Token::Word(word) => match word {
                Word::Print => self.print_statement(),
                Word::If => self.if_statement(),
                Word::For => self.for_statement(),
                Word::While => self.while_statement(),
                Word::End => self.end_statement(),
                Word::Rem => self.rem_statement(),
                Word::Wait => self.wait_statement(),
                Word::Leds => self.leds_statement(),
                Word::Motors => self.motors_statement(),
                Word::Speed => self.speed_statement(),
                Word::Sense => self.sense_statement(),
                Word::Read => self.read_statement(),
                Word::Display => self.display_statement(),
                Word::Note => self.note_statement(),
                Word::Move => self.move_statement(),
                Word::Turn => self.turn_statement(),
                Word::Cal => self.cal_statement(),
                Word::Else | Word::To => Err(error!(
                    SyntaxError,
                    ..self.tokenizer.offset();
                    format!("UNEXPECTED {}", word.to_string().to_uppercase())
                )),
            },
            Token::Semicolon => {
                self.tokenizer.advance();
                Ok(())
            }
            Token::RBrace => Err(error!(UnexpectedClosingBrace, ..self.tokenizer.offset())),
            _ => Err(error!(SyntaxError, ..self.tokenizer.offset(); "EXPECTED STATEMENT")),
        }
    }

    /// Runs statements up to the `}` closing the current block,
    /// leaving the `}` as the current token.
    fn block(&mut self) -> Result<()> {
        loop {
            match self.tokenizer.token() {
                Token::RBrace => return Ok(()),
                Token::EndOfInput => {
                    return Err(error!(MissingClosingBrace, ..self.tokenizer.offset()))
                }
                _ => {}
            }
            self.statement()?;
            if self.ended {
                return Ok(());
            }
        }
    }

    /// Scans past the `}` matching an already accepted `{`.
    fn skip_block(&mut self) -> Result<()> {
        let mut depth: i32 = 1;
        loop {
            match self.tokenizer.token() {
                Token::LBrace => depth += 1,
                Token::RBrace => {
                    depth -= 1;
                    if depth == 0 {
                        self.tokenizer.advance();
                        return Ok(());
                    }
                }
                Token::EndOfInput => {
                    return Err(error!(MissingClosingBrace, ..self.tokenizer.offset()))
                }
                _ => {}
            }
            self.tokenizer.advance();
        }
    }

    fn let_statement(&mut self) -> Result<()> {
        let index = self.variable_operand()?;
        self.accept(Token::Operator(Operator::Equal))?;
        let value = self.expr()?;
        self.var.store(index, value);
        self.end_of_statement()
    }

    fn print_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::Print))?;
        loop {
            match self.tokenizer.token() {
                Token::String => {
                    let s = self.tokenizer.string(MAX_STRINGLEN);
                    self.hardware.send(&s);
                    self.tokenizer.advance();
                }
                Token::Comma => {
                    self.hardware.send(" ");
                    self.tokenizer.advance();
                }
                token if token.is_terminator() => break,
                _ => {
                    let value = self.expr()?;
                    self.hardware.send(&value.to_string());
                }
            }
        }
        self.hardware.send("\n");
        self.end_of_statement()
    }

    fn if_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::If))?;
        let r = self.relation()?;
        self.accept(Token::LBrace)?;
        if r != 0 {
            self.block()?;
            if self.ended {
                return Ok(());
            }
            self.accept(Token::RBrace)?;
            if self.tokenizer.token() == Token::Word(Word::Else) {
                self.tokenizer.advance();
                self.accept(Token::LBrace)?;
                self.skip_block()?;
            }
        } else {
            self.skip_block()?;
            if self.tokenizer.token() == Token::Word(Word::Else) {
                self.tokenizer.advance();
                self.accept(Token::LBrace)?;
                self.block()?;
                if self.ended {
                    return Ok(());
                }
                self.accept(Token::RBrace)?;
            }
        }
        self.end_of_block_statement();
        Ok(())
    }

    fn for_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::For))?;
        let index = self.variable_operand()?;
        self.accept(Token::Operator(Operator::Equal))?;
        let from = self.expr()?;
        self.var.store(index, from);
        self.accept(Token::Word(Word::To))?;
        let to = self.expr()?;
        self.accept(Token::LBrace)?;
        let body = self.tokenizer.position();
        loop {
            self.block()?;
            if self.ended {
                return Ok(());
            }
            let value = self.var.fetch(index);
            self.var.store(index, value.wrapping_add(1));
            if value >= to {
                break;
            }
            self.stop_check()?;
            log::trace!("for rewinds to {}", body.offset());
            self.tokenizer.set_position(body);
        }
        self.accept(Token::RBrace)?;
        self.end_of_block_statement();
        Ok(())
    }

    fn while_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::While))?;
        let condition = self.tokenizer.position();
        loop {
            let r = self.relation()?;
            self.accept(Token::LBrace)?;
            if r == 0 {
                self.skip_block()?;
                break;
            }
            self.block()?;
            if self.ended {
                return Ok(());
            }
            self.stop_check()?;
            log::trace!("while rewinds to {}", condition.offset());
            self.tokenizer.set_position(condition);
        }
        self.end_of_block_statement();
        Ok(())
    }

    fn end_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::End))?;
        self.ended = true;
        if self.tokenizer.token() == Token::Semicolon {
            self.tokenizer.advance();
        }
        Ok(())
    }

    fn rem_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::Rem))?;
        while !self.tokenizer.token().is_terminator() {
            self.tokenizer.advance();
        }
        self.end_of_statement()
    }

    /// Tenths of a second, counted in 8 ms ticks.
    fn wait_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::Wait))?;
        let tenths = self.expr()?.max(0) as u16;
        let count = tenths
            .saturating_mul(12)
            .saturating_add(tenths >> 1)
            .min(u16::max_value() - 1);
        self.hardware.clear_ticks();
        loop {
            self.stop_check()?;
            if self.hardware.ticks() > count {
                break;
            }
        }
        self.end_of_statement()
    }

    fn leds_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::Leds))?;
        for &led in Led::ALL.iter() {
            let code = match self.tokenizer.token() {
                Token::Variable => {
                    let index = self.variable_operand()?;
                    i32::from(self.var.fetch(index))
                }
                _ => self.number_operand()? as i32,
            };
            match code {
                0 => self.hardware.clear_led(led),
                1 => self.hardware.set_led(led, Flash::Off),
                2 => self.hardware.set_led(led, Flash::On),
                _ => log::warn!("led {:?} code {} ignored", led, code),
            }
        }
        self.end_of_statement()
    }

    fn drive(&mut self, motor: Motor, code: i16, speed: i16) {
        match code {
            0 => self.hardware.set_motor(motor, Direction::Brake, 0),
            1 => self.hardware.set_motor(motor, Direction::Forward, speed),
            2 => self.hardware.set_motor(motor, Direction::Backward, speed),
            _ => log::warn!("motor {:?} code {} ignored", motor, code),
        }
    }

    fn motors_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::Motors))?;
        let left = self.expr()?;
        self.drive(Motor::Left, left, self.left_speed);
        let right = self.expr()?;
        self.drive(Motor::Right, right, self.right_speed);
        self.end_of_statement()
    }

    fn speed_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::Speed))?;
        self.left_speed = self.expr()?;
        self.right_speed = self.expr()?;
        self.end_of_statement()
    }

    fn sense_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::Sense))?;
        let channel = self.number_operand()?;
        let value = if channel < ADC_CHANNELS {
            self.hardware.adc(channel as u8)
        } else {
            let switch = match channel.wrapping_sub(SWITCH_CHANNELS) {
                0 => Some(Switch::A),
                1 => Some(Switch::B),
                2 => Some(Switch::C),
                3 => Some(Switch::D),
                _ => None,
            };
            match switch {
                Some(switch) => self.hardware.switch(switch) as i16,
                None => {
                    log::warn!("sense channel {} does not exist", channel);
                    0
                }
            }
        };
        let index = self.variable_operand()?;
        self.var.store(index, value);
        self.end_of_statement()
    }

    fn read_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::Read))?;
        let item = self.number_operand()?;
        let index = self.variable_operand()?;
        self.end_of_statement()?;
        let value = match item {
            0 => self.hardware.ticks() as i16,
            _ => {
                log::warn!("read item {} does not exist", item);
                0
            }
        };
        self.var.store(index, value);
        Ok(())
    }

    fn display_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::Display))?;
        while !self.tokenizer.token().is_terminator() {
            if self.tokenizer.token() != Token::String {
                return Err(self.expected(Token::String));
            }
            let s = self.tokenizer.string(MAX_STRINGLEN);
            self.hardware.display_string(&s, DisplayTarget::SevenSegAb);
            self.tokenizer.advance();
        }
        self.end_of_statement()
    }

    fn note_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::Note))?;
        let note = self.expr()?;
        let tenths = self.expr()?.max(0) as u16;
        self.hardware.play_tone(note as u8, tenths.saturating_mul(100));
        self.end_of_statement()
    }

    /// Works out the wheel counts for a distance but does not drive.
    fn move_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::Move))?;
        let distance = self.expr()?;
        let direction = if distance < 0 {
            Direction::Backward
        } else {
            Direction::Forward
        };
        let counts = i32::from(distance) * WHEEL_CONSTANT / 100;
        let (left, right) = match direction {
            Direction::Backward => (
                self.left_speed.wrapping_neg(),
                self.right_speed.wrapping_neg(),
            ),
            _ => (self.left_speed, self.right_speed),
        };
        log::debug!(
            "move {:?} {} wheel counts at {}/{} not driven",
            direction,
            counts,
            left,
            right
        );
        self.end_of_statement()
    }

    fn turn_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::Turn))?;
        if !self.tokenizer.token().is_terminator() {
            let angle = self.expr()?;
            log::debug!("turn {} ignored", angle);
        }
        self.end_of_statement()
    }

    fn cal_statement(&mut self) -> Result<()> {
        self.accept(Token::Word(Word::Cal))?;
        self.hardware.calibrate();
        self.end_of_statement()
    }
}
