/*!
# `motors <left> <right>`
Abbreviation `mo`.
## Purpose
Starts or stops both motors.

## Remarks
Each expression is 0 to brake, 1 for forward or 2 for backward.
Running motors use the speeds set by the last `speed` statement.
The left motor is set before the right expression is evaluated, so an
error in the right expression leaves the left motor running.

## Example
```text
speed 60 60;
motors 1 2
```

*/
