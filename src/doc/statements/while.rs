/*!
# `while <relation> { ... }`

## Purpose
Repeats a block as long as a condition holds.

## Remarks
The relation is evaluated again before every pass.
When it is false from the start the block never runs.
Pressing stop between passes ends the program.

## Example
```text
a = 0;
while a < 3 { a = a + 1; print a }
1
2
3
```

*/
