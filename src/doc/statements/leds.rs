/*!
# `leds a b c d`
Abbreviation `le`.
## Purpose
Sets the four LEDs.

## Remarks
Each operand is a number or a variable: 0 turns the LED off,
1 turns it on and 2 makes it flash. Other values leave the LED as it is.
Expressions are not allowed.

## Example
```text
leds 1 0 2 x
```

*/
