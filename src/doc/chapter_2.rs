/*!
# Statements

Statements are separated by `;`. A statement that ends a block or the
program needs no `;`. Keywords are lower case and most have a two
letter abbreviation.
*/

#[path = "statements/cal.rs"]
#[allow(non_snake_case)]
pub mod CAL;

#[path = "statements/display.rs"]
#[allow(non_snake_case)]
pub mod DISPLAY;

#[path = "statements/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "statements/for.rs"]
#[allow(non_snake_case)]
pub mod FOR;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/leds.rs"]
#[allow(non_snake_case)]
pub mod LEDS;

#[path = "statements/let.rs"]
#[allow(non_snake_case)]
pub mod LET;

#[path = "statements/motors.rs"]
#[allow(non_snake_case)]
pub mod MOTORS;

#[path = "statements/move.rs"]
#[allow(non_snake_case)]
pub mod MOVE;

#[path = "statements/note.rs"]
#[allow(non_snake_case)]
pub mod NOTE;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/read.rs"]
#[allow(non_snake_case)]
pub mod READ;

#[path = "statements/rem.rs"]
#[allow(non_snake_case)]
pub mod REM;

#[path = "statements/sense.rs"]
#[allow(non_snake_case)]
pub mod SENSE;

#[path = "statements/speed.rs"]
#[allow(non_snake_case)]
pub mod SPEED;

#[path = "statements/turn.rs"]
#[allow(non_snake_case)]
pub mod TURN;

#[path = "statements/wait.rs"]
#[allow(non_snake_case)]
pub mod WAIT;

#[path = "statements/while.rs"]
#[allow(non_snake_case)]
pub mod WHILE;
