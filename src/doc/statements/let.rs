/*!
# `<variable> = <expression>`

## Purpose
Assigns a value to one of the variables `a` through `z`.

## Remarks
There is no `let` keyword. All variables exist from the start and
hold zero. Values are 16 bit and wrap around on overflow.

## Example
```text
a = 32767;
a = a + 1;
print a
-32768
```

*/
