/*!
# `end`

## Purpose
Immediately and unconditionally stops running the program.

## Remarks
`end` may appear inside a block. Running off the end of the program
text stops it just the same, so a final `end` is optional.

## Example
```text
print 'hello';
end;
print 'this does not print'
hello
```

*/
