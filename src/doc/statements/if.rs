/*!
# `if <relation> { ... } [else { ... }]`

## Purpose
Runs a block only when a condition holds.

## Remarks
The relation is true when it is not zero. When it is false the block
is skipped by counting braces, so nothing inside it is evaluated, not
even an expression that would divide by zero.

`else` must follow the closing brace of the first block.
A `;` after the final `}` is allowed but not needed.

## Example
```text
sense 0 a;
if a > 100 { print 'bright' } else { print 'dark' }
```

*/
