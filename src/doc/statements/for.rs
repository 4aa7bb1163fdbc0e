/*!
# `for <variable> = x to y { ... }`
Where x and y are expressions.
## Purpose
Repeats a block while counting a variable up by one.

## Remarks
x is stored in the variable and y is evaluated once before the first
pass. After every pass the variable is increased by one and the block
runs again if the old value was less than y.

The block always runs at least once, even when x is past y.
After the loop the variable is one more than its last value in the block.

## Example
```text
for i = 1 to 3 { print 'pass ', i }
print i
pass  1
pass  2
pass  3
4
```

*/
